//! Wire contracts for the Orion compiler service.
//!
//! The playground client consumes three JSON-over-HTTP POST endpoints; this
//! crate pins their request/response shapes and defines the transport seam
//! (`CompilerTransport`) the session layer depends on. The client never
//! implements these endpoints, only talks to them.

use playground_types::{CompilerBackend, PlaygroundAction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the compile endpoint
pub const COMPILE_PATH: &str = "/compile";
/// Path of the syntax check endpoint
pub const CHECK_SYNTAX_PATH: &str = "/check-syntax";
/// Path of the AST endpoint
pub const AST_PATH: &str = "/ast";
/// Content type for every request
pub const CONTENT_TYPE: &str = "application/json";

/// Returns the endpoint path for an action
pub fn endpoint_path(action: PlaygroundAction) -> &'static str {
    match action {
        PlaygroundAction::Compile => COMPILE_PATH,
        PlaygroundAction::CheckSyntax => CHECK_SYNTAX_PATH,
        PlaygroundAction::Ast => AST_PATH,
    }
}

/// `POST /compile` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Source text, already trimmed by the editor
    pub code: String,
    /// Optional execution backend; the server default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerBackend>,
}

/// `POST /compile` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileResponse {
    /// Whether compilation and execution succeeded
    pub success: bool,
    /// Program output on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Server-supplied error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Compilation time in milliseconds, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation_time: Option<f64>,
    /// Execution time in milliseconds, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    /// Total round-trip time in milliseconds, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
}

/// `POST /check-syntax` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxCheckRequest {
    /// Source text, already trimmed by the editor
    pub code: String,
}

/// One token reported by a successful syntax check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token class name
    #[serde(rename = "type")]
    pub token_type: String,
    /// Token text
    pub value: String,
    /// 1-based source line, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based source column, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

/// `POST /check-syntax` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxCheckResponse {
    /// Whether the source parsed cleanly
    pub valid: bool,
    /// Token listing on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenInfo>>,
    /// Server-supplied error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST /ast` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstRequest {
    /// Source text, already trimmed by the editor
    pub code: String,
}

/// `POST /ast` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstResponse {
    /// Whether the tree was produced
    pub success: bool,
    /// Rendered tree on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ast: Option<String>,
    /// Server-supplied error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for any of the three endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionRequest {
    /// Compile and run
    Compile(CompileRequest),
    /// Syntax check
    CheckSyntax(SyntaxCheckRequest),
    /// AST rendering
    Ast(AstRequest),
}

impl ActionRequest {
    /// The action this request belongs to
    pub fn action(&self) -> PlaygroundAction {
        match self {
            ActionRequest::Compile(_) => PlaygroundAction::Compile,
            ActionRequest::CheckSyntax(_) => PlaygroundAction::CheckSyntax,
            ActionRequest::Ast(_) => PlaygroundAction::Ast,
        }
    }

    /// The endpoint path this request is POSTed to
    pub fn path(&self) -> &'static str {
        endpoint_path(self.action())
    }

    /// Serializes the request body
    pub fn to_json(&self) -> Result<String, TransportError> {
        let body = match self {
            ActionRequest::Compile(req) => serde_json::to_string(req),
            ActionRequest::CheckSyntax(req) => serde_json::to_string(req),
            ActionRequest::Ast(req) => serde_json::to_string(req),
        };
        body.map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Response from any of the three endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionResponse {
    /// Compile and run
    Compile(CompileResponse),
    /// Syntax check
    CheckSyntax(SyntaxCheckResponse),
    /// AST rendering
    Ast(AstResponse),
}

impl ActionResponse {
    /// The action this response belongs to
    pub fn action(&self) -> PlaygroundAction {
        match self {
            ActionResponse::Compile(_) => PlaygroundAction::Compile,
            ActionResponse::CheckSyntax(_) => PlaygroundAction::CheckSyntax,
            ActionResponse::Ast(_) => PlaygroundAction::Ast,
        }
    }

    /// Decodes a response body for the given action
    pub fn from_json(action: PlaygroundAction, body: &str) -> Result<Self, TransportError> {
        let decoded = match action {
            PlaygroundAction::Compile => {
                serde_json::from_str(body).map(ActionResponse::Compile)
            }
            PlaygroundAction::CheckSyntax => {
                serde_json::from_str(body).map(ActionResponse::CheckSyntax)
            }
            PlaygroundAction::Ast => serde_json::from_str(body).map(ActionResponse::Ast),
        };
        decoded.map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Transport-level failure
///
/// Any non-2xx status is a transport failure regardless of body content;
/// semantic failures travel inside a 2xx response body instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Non-2xx HTTP status
    #[error("HTTP {status}: {reason}")]
    Http {
        /// Status code
        status: u16,
        /// Status reason phrase
        reason: String,
    },

    /// Connection-level failure (DNS, refused, timeout, ...)
    #[error("{0}")]
    Network(String),

    /// Body could not be encoded or decoded
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// The network seam the session layer depends on
///
/// Implementations own the actual HTTP machinery (or a mock in tests). One
/// `perform` call corresponds to exactly one outbound request.
pub trait CompilerTransport {
    /// Performs one request round trip
    fn perform(&mut self, request: &ActionRequest) -> Result<ActionResponse, TransportError>;
}
