#![no_std]

//! # Playground Types
//!
//! This crate defines the fundamental types shared across the Orion
//! playground client.
//!
//! ## Philosophy
//!
//! - **Typed, not stringly-typed**: Statuses and output kinds are enums,
//!   never CSS class names or magic strings
//! - **Derived labels**: Human-readable labels are functions of the enum
//!   value, not separately stored state
//! - **Testable**: All types are serializable and comparable
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A rendering layer (hosts decide how kinds and statuses look)
//! - The wire contract for the compiler service (see `compiler_api`)

extern crate alloc;

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one submission round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Creates a new unique submission ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission:{}", self.0)
    }
}

/// Action requested against the compiler service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaygroundAction {
    /// Compile and run the document
    Compile,
    /// Validate syntax only
    CheckSyntax,
    /// Render the abstract syntax tree
    Ast,
}

impl fmt::Display for PlaygroundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaygroundAction::Compile => write!(f, "compile"),
            PlaygroundAction::CheckSyntax => write!(f, "check-syntax"),
            PlaygroundAction::Ast => write!(f, "ast"),
        }
    }
}

/// Kind tag for one output stream entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// Plain program output
    Normal,
    /// Progress and context messages
    Info,
    /// Positive outcome banners
    Success,
    /// Non-fatal warnings
    Warning,
    /// Errors, both semantic and transport
    Error,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Normal => write!(f, "normal"),
            OutputKind::Info => write!(f, "info"),
            OutputKind::Success => write!(f, "success"),
            OutputKind::Warning => write!(f, "warning"),
            OutputKind::Error => write!(f, "error"),
        }
    }
}

/// One entry in the append-only output stream
///
/// Once written, an entry's kind never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Entry text, exactly as appended
    pub text: String,
    /// Kind tag assigned at insertion
    pub kind: OutputKind,
}

impl OutputEntry {
    /// Creates a new output entry
    pub fn new(text: impl Into<String>, kind: OutputKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Creates a plain entry
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Normal)
    }

    /// Creates an info entry
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Info)
    }

    /// Creates a success entry
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Success)
    }

    /// Creates an error entry
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Error)
    }
}

/// Outcome of the most recent syntax check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxStatus {
    /// No check performed yet
    Ready,
    /// A check is in flight
    Checking,
    /// Last check passed
    Valid,
    /// Last check failed (or could not be performed)
    Invalid,
}

impl SyntaxStatus {
    /// Human-readable label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            SyntaxStatus::Ready => "Ready",
            SyntaxStatus::Checking => "Checking...",
            SyntaxStatus::Valid => "Valid",
            SyntaxStatus::Invalid => "Invalid",
        }
    }
}

impl Default for SyntaxStatus {
    fn default() -> Self {
        SyntaxStatus::Ready
    }
}

impl fmt::Display for SyntaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of the most recent compile or AST run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No run performed yet
    Ready,
    /// A run is in flight
    Running,
    /// Last run succeeded
    Success,
    /// Last run failed (semantic or transport)
    Error,
}

impl RunStatus {
    /// Human-readable label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Ready => "Ready",
            RunStatus::Running => "Running...",
            RunStatus::Success => "Success",
            RunStatus::Error => "Error",
        }
    }
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Ready
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Execution backend selector for compile requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilerBackend {
    /// Native code backend
    Native,
    /// Interpreter backend
    Interpreter,
}

impl CompilerBackend {
    /// Value carried in the `compiler` wire field
    pub fn wire_name(&self) -> &'static str {
        match self {
            CompilerBackend::Native => "native",
            CompilerBackend::Interpreter => "interpreter",
        }
    }

    /// Human-readable backend name for progress messages
    pub fn label(&self) -> &'static str {
        match self {
            CompilerBackend::Native => "Native C++",
            CompilerBackend::Interpreter => "Python Interpreter",
        }
    }
}

impl Default for CompilerBackend {
    fn default() -> Self {
        CompilerBackend::Native
    }
}

impl fmt::Display for CompilerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
