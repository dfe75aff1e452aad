//! # Playground CLI
//!
//! Terminal front-end for the Orion playground client. The heavy lifting
//! lives in the component crates; this crate only wires them to a real HTTP
//! transport and a line-based prompt.

pub mod http;
pub mod repl;

pub use http::HttpTransport;
pub use repl::{Repl, ReplOutcome};
