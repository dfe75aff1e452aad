//! Line-based prompt over the command dispatcher.
//!
//! Commands are single words (`compile`, `check`, `ast`, ...); anything that
//! is not a command is appended to the editor document as a line of code,
//! with the editor's auto-indent applied. The prompt renders the output
//! stream after every command that touches it.

use command_dispatch::{CommandDispatcher, DispatchOutcome, PlaygroundCommand};
use compiler_api::CompilerTransport;
use example_catalog::ExampleId;
use playground_types::{CompilerBackend, OutputKind, PlaygroundAction};
use services_session::LoadingSignal;

/// Whether the prompt loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Keep reading input
    Continue,
    /// The user asked to leave
    Quit,
}

/// One handled input line: loop control plus the lines to print
#[derive(Debug, PartialEq, Eq)]
pub struct ReplResponse {
    /// Loop control
    pub outcome: ReplOutcome,
    /// Text to show the user, one element per terminal line
    pub lines: Vec<String>,
}

impl ReplResponse {
    fn print(lines: Vec<String>) -> Self {
        Self {
            outcome: ReplOutcome::Continue,
            lines,
        }
    }

    fn silent() -> Self {
        Self::print(Vec::new())
    }

    fn quit() -> Self {
        Self {
            outcome: ReplOutcome::Quit,
            lines: Vec::new(),
        }
    }
}

/// Tracks which action currently holds the in-flight slot
#[derive(Debug, Default)]
struct PendingIndicator {
    active: Option<PlaygroundAction>,
}

impl LoadingSignal for PendingIndicator {
    fn set_loading(&mut self, action: PlaygroundAction, loading: bool) {
        if loading {
            self.active = Some(action);
        } else if self.active == Some(action) {
            self.active = None;
        }
    }
}

/// The interactive prompt
pub struct Repl {
    dispatcher: CommandDispatcher,
    indicator: PendingIndicator,
}

impl Repl {
    /// Creates a prompt with the page-load state (the `hello` example)
    pub fn new() -> Self {
        Self {
            dispatcher: CommandDispatcher::new(),
            indicator: PendingIndicator::default(),
        }
    }

    /// The dispatcher behind the prompt
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Selects the execution backend for later compiles
    pub fn select_backend<T: CompilerTransport>(
        &mut self,
        backend: CompilerBackend,
        transport: &mut T,
    ) {
        self.dispatcher.execute(
            PlaygroundCommand::SetBackend(backend),
            transport,
            &mut self.indicator,
        );
    }

    /// Handles one input line
    pub fn handle_line<T: CompilerTransport>(
        &mut self,
        line: &str,
        transport: &mut T,
    ) -> ReplResponse {
        let trimmed = line.trim_end();
        let mut words = trimmed.split_whitespace();
        let head = match words.next() {
            Some(word) => word,
            None => return ReplResponse::silent(),
        };
        let args: Vec<&str> = words.collect();

        match (head, args.as_slice()) {
            ("help", []) => ReplResponse::print(help_lines()),
            ("examples", []) => ReplResponse::print(self.example_lines()),
            ("load", [id]) => {
                self.run(PlaygroundCommand::LoadExample(ExampleId::new(*id)), transport)
            }
            ("load", _) => ReplResponse::print(vec!["Usage: load <id>".to_string()]),
            ("compile", []) | ("run", []) => self.run(PlaygroundCommand::Compile, transport),
            ("check", []) => self.run(PlaygroundCommand::CheckSyntax, transport),
            ("ast", []) => self.run(PlaygroundCommand::ShowAst, transport),
            ("clear", []) => self.run(PlaygroundCommand::ClearEditor, transport),
            ("clear-output", []) => self.run(PlaygroundCommand::ClearOutput, transport),
            ("backend", [name]) => match parse_backend(name) {
                Some(backend) => self.run(PlaygroundCommand::SetBackend(backend), transport),
                None => ReplResponse::print(vec![format!(
                    "Unknown backend: {} (expected native or interpreter)",
                    name
                )]),
            },
            ("backend", _) => {
                ReplResponse::print(vec!["Usage: backend native|interpreter".to_string()])
            }
            ("show", []) => ReplResponse::print(self.document_lines()),
            ("status", []) => ReplResponse::print(vec![self.status_line()]),
            ("quit", []) | ("exit", []) => ReplResponse::quit(),
            _ => {
                self.append_code_line(trimmed);
                ReplResponse::silent()
            }
        }
    }

    /// Current status indicators as a single line
    pub fn status_line(&self) -> String {
        let board = self.dispatcher.board();
        format!(
            "syntax: {} | run: {} | backend: {}",
            board.syntax().label(),
            board.run().label(),
            self.dispatcher.backend().label()
        )
    }

    /// The output stream rendered for the terminal
    pub fn output_lines(&self) -> Vec<String> {
        self.dispatcher
            .sink()
            .entries()
            .iter()
            .map(|entry| match entry.kind {
                OutputKind::Normal => entry.text.clone(),
                kind => format!("[{}] {}", kind, entry.text),
            })
            .collect()
    }

    fn run<T: CompilerTransport>(
        &mut self,
        command: PlaygroundCommand,
        transport: &mut T,
    ) -> ReplResponse {
        let is_load = matches!(command, PlaygroundCommand::LoadExample(_));
        let missing = match &command {
            PlaygroundCommand::LoadExample(id) => Some(id.to_string()),
            _ => None,
        };

        let outcome = self
            .dispatcher
            .execute(command, transport, &mut self.indicator);

        match outcome {
            DispatchOutcome::Ignored if is_load => ReplResponse::print(vec![format!(
                "Unknown example: {}",
                missing.unwrap_or_default()
            )]),
            _ => ReplResponse::print(self.output_lines()),
        }
    }

    fn example_lines(&self) -> Vec<String> {
        let mut lines = vec!["Available examples:".to_string()];
        for id in self.dispatcher.catalog().ids() {
            lines.push(format!("  {}", id));
        }
        lines
    }

    fn document_lines(&self) -> Vec<String> {
        let document = self.dispatcher.document();
        let labels = document.line_number_labels();
        let width = labels.last().map(|l| l.len()).unwrap_or(1);
        labels
            .iter()
            .zip(document.lines())
            .map(|(label, line)| format!("{:>width$} | {}", label, line, width = width))
            .collect()
    }

    fn append_code_line(&mut self, line: &str) {
        let current = self.dispatcher.document().text().to_string();
        let new_text = if current.is_empty() {
            line.to_string()
        } else {
            let previous = current.rsplit('\n').next().unwrap_or("");
            let indent = if line.starts_with([' ', '\t']) {
                String::new()
            } else {
                editor_buffer::indent_for_new_line(previous)
            };
            format!("{}\n{}{}", current, indent, line)
        };
        self.dispatcher.set_source(new_text);
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_backend(name: &str) -> Option<CompilerBackend> {
    match name {
        "native" => Some(CompilerBackend::Native),
        "interpreter" => Some(CompilerBackend::Interpreter),
        _ => None,
    }
}

fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  compile | run            compile and execute the editor contents",
        "  check                    check syntax only",
        "  ast                      show the abstract syntax tree",
        "  load <id>                load an example program",
        "  examples                 list the example programs",
        "  show                     print the editor contents",
        "  status                   show the status indicators",
        "  backend <name>           select 'native' or 'interpreter'",
        "  clear                    clear the editor",
        "  clear-output             clear the output stream",
        "  quit | exit              leave",
        "",
        "Any other input is appended to the editor as a line of code.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler_api::{
        ActionRequest, ActionResponse, CompileResponse, SyntaxCheckResponse, TransportError,
    };

    struct ScriptedTransport {
        calls: usize,
    }

    impl ScriptedTransport {
        fn new() -> Self {
            Self { calls: 0 }
        }
    }

    impl CompilerTransport for ScriptedTransport {
        fn perform(&mut self, request: &ActionRequest) -> Result<ActionResponse, TransportError> {
            self.calls += 1;
            Ok(match request {
                ActionRequest::Compile(_) => ActionResponse::Compile(CompileResponse {
                    success: true,
                    output: Some("Hello, Orion World!".to_string()),
                    error: None,
                    compilation_time: None,
                    execution_time: Some(45.0),
                    total_time: None,
                }),
                ActionRequest::CheckSyntax(_) => ActionResponse::CheckSyntax(SyntaxCheckResponse {
                    valid: true,
                    tokens: None,
                    error: None,
                }),
                ActionRequest::Ast(_) => ActionResponse::Ast(compiler_api::AstResponse {
                    success: true,
                    ast: Some("Program".to_string()),
                    error: None,
                }),
            })
        }
    }

    #[test]
    fn test_quit_and_exit_stop_the_loop() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        assert_eq!(
            repl.handle_line("quit", &mut transport).outcome,
            ReplOutcome::Quit
        );
        assert_eq!(
            repl.handle_line("exit", &mut transport).outcome,
            ReplOutcome::Quit
        );
    }

    #[test]
    fn test_empty_line_is_silent() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let response = repl.handle_line("   ", &mut transport);
        assert_eq!(response.outcome, ReplOutcome::Continue);
        assert!(response.lines.is_empty());
        assert_eq!(transport.calls, 0);
    }

    #[test]
    fn test_compile_renders_output_stream() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let response = repl.handle_line("compile", &mut transport);

        assert_eq!(transport.calls, 1);
        assert_eq!(response.lines[0], "[info] Compiling with Native C++...");
        assert!(response
            .lines
            .iter()
            .any(|l| l == "[success] ✓ Compilation successful!"));
        assert!(response.lines.iter().any(|l| l == "Hello, Orion World!"));
    }

    #[test]
    fn test_load_unknown_example_reports_miss() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let response = repl.handle_line("load quicksort", &mut transport);
        assert_eq!(response.lines, vec!["Unknown example: quicksort"]);
    }

    #[test]
    fn test_load_known_example() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let response = repl.handle_line("load fibonacci", &mut transport);
        assert_eq!(response.lines, vec!["[info] Example loaded: fibonacci"]);
        assert!(repl.dispatcher().document().text().contains("fibonacci"));
    }

    #[test]
    fn test_code_lines_append_with_auto_indent() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        repl.handle_line("clear", &mut transport);
        repl.handle_line("fn main() {", &mut transport);
        repl.handle_line("out(\"hi\")", &mut transport);
        repl.handle_line("}", &mut transport);

        // Closing brace keeps the deepened indent; the prompt offers no
        // way to outdent, matching a plain textarea's behavior of keeping
        // what was typed.
        assert_eq!(
            repl.dispatcher().document().text(),
            "fn main() {\n    out(\"hi\")\n    }"
        );
    }

    #[test]
    fn test_backend_command_switches_progress_message() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        repl.handle_line("backend interpreter", &mut transport);
        let response = repl.handle_line("compile", &mut transport);
        assert_eq!(
            response.lines[0],
            "[info] Compiling with Python Interpreter..."
        );
    }

    #[test]
    fn test_unknown_backend_is_reported() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let response = repl.handle_line("backend jit", &mut transport);
        assert_eq!(
            response.lines,
            vec!["Unknown backend: jit (expected native or interpreter)"]
        );
    }

    #[test]
    fn test_one_arg_commands_reject_trailing_words() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        let text_before = repl.dispatcher().document().text().to_string();

        let response = repl.handle_line("load fibonacci extra", &mut transport);
        assert_eq!(response.lines, vec!["Usage: load <id>"]);
        assert_eq!(repl.dispatcher().document().text(), text_before);

        let response = repl.handle_line("backend interpreter now", &mut transport);
        assert_eq!(response.lines, vec!["Usage: backend native|interpreter"]);
        assert_eq!(repl.dispatcher().backend(), CompilerBackend::Native);
        assert_eq!(transport.calls, 0);
    }

    #[test]
    fn test_status_line() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        repl.handle_line("check", &mut transport);
        assert_eq!(
            repl.status_line(),
            "syntax: Valid | run: Ready | backend: Native C++"
        );
    }

    #[test]
    fn test_show_prints_gutter_labels() {
        let mut repl = Repl::new();
        let mut transport = ScriptedTransport::new();
        repl.handle_line("clear", &mut transport);
        repl.handle_line("a", &mut transport);
        repl.handle_line("b", &mut transport);
        let response = repl.handle_line("show", &mut transport);
        assert_eq!(response.lines, vec!["1 | a", "2 | b"]);
    }
}
