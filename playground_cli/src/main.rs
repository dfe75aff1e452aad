//! # Orion Playground CLI
//!
//! Interactive terminal client for the Orion compiler service.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use playground_cli::repl::{Repl, ReplOutcome};
use playground_cli::HttpTransport;
use playground_types::CompilerBackend;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

struct CliConfig {
    server: String,
    backend: Option<CompilerBackend>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            backend: None,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let mut transport = HttpTransport::new(config.server.clone());
    let mut repl = Repl::new();
    if let Some(backend) = config.backend {
        repl.select_backend(backend, &mut transport);
    }

    println!("Orion playground, talking to {}", config.server);
    println!("Type 'help' for commands.");
    for line in repl.output_lines() {
        println!("{}", line);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let response = repl.handle_line(&line, &mut transport);
        for text in &response.lines {
            println!("{}", text);
        }
        if response.outcome == ReplOutcome::Quit {
            break;
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--server" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --server".to_string());
                }
                config.server = args[i].clone();
            }
            "--backend" | "-b" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --backend".to_string());
                }
                config.backend = match args[i].as_str() {
                    "native" => Some(CompilerBackend::Native),
                    "interpreter" => Some(CompilerBackend::Interpreter),
                    other => return Err(format!("Invalid backend: {}", other)),
                };
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --server <URL>       Compiler service base URL");
    eprintln!("                           (default: {})", DEFAULT_SERVER);
    eprintln!("  -b, --backend <NAME>     Execution backend: native or interpreter");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --server http://localhost:5000", program);
    eprintln!("  {} --backend interpreter", program);
}
