//! # Request Session Service
//!
//! The single-slot submission state machine of the playground client.
//!
//! ## Philosophy
//!
//! - **One slot, no queue**: At most one submission is in flight; extra
//!   submissions are dropped, never buffered
//! - **No ambient authority**: The session never performs network IO. It
//!   hands the host a ticket carrying the wire request, and the host reports
//!   the outcome back. All IO is explicit
//! - **Guarded state**: The pending flag lives inside the session and is
//!   only reachable through `begin`/`resolve`/`is_pending`; UI code cannot
//!   touch it directly
//! - **Terminal failures**: Nothing is retried; every failure surfaces as
//!   output entries plus a status update, and the session returns to a
//!   resubmittable state
//!
//! ## Lifecycle
//!
//! `begin` runs the preflight (duplicate suppression, empty-source check),
//! writes the in-progress entries, raises the loading signal, and issues the
//! ticket. The host performs exactly one transport call per ticket, then
//! calls `resolve`, which renders the outcome and always lowers the loading
//! signal and frees the slot. `submit` drives both halves against a
//! [`CompilerTransport`] for synchronous hosts.

use compiler_api::{
    ActionRequest, ActionResponse, AstRequest, CompileRequest, CompilerTransport,
    SyntaxCheckRequest, TransportError,
};
use editor_buffer::EditorDocument;
use playground_types::{
    CompilerBackend, OutputKind, PlaygroundAction, RunStatus, SubmissionId, SyntaxStatus,
};
use services_output::{OutputSink, StatusBoard};

/// Horizontal rule separating banner and payload in the output stream
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Loading affordance on the control that triggered a submission
///
/// Hosts map this to whatever their UI shows while a request is outstanding
/// (spinner, disabled button). [`NullLoadingSignal`] is for hosts without
/// one.
pub trait LoadingSignal {
    /// Raises or lowers the affordance for the given action
    fn set_loading(&mut self, action: PlaygroundAction, loading: bool);
}

/// Loading signal for hosts with no loading affordance
#[derive(Debug, Default)]
pub struct NullLoadingSignal;

impl LoadingSignal for NullLoadingSignal {
    fn set_loading(&mut self, _action: PlaygroundAction, _loading: bool) {}
}

/// Permission to perform one transport call
///
/// Issued by [`RequestSession::begin`]; consumed by
/// [`RequestSession::resolve`]. The wire request is built once, at issue
/// time, from the document's trimmed submission text.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    id: SubmissionId,
    request: ActionRequest,
}

impl SubmissionTicket {
    /// The submission this ticket belongs to
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// The wire request the host must perform
    pub fn request(&self) -> &ActionRequest {
        &self.request
    }

    /// The action being performed
    pub fn action(&self) -> PlaygroundAction {
        self.request.action()
    }
}

/// Result of a `begin` call
#[derive(Debug, Clone, PartialEq)]
pub enum BeginOutcome {
    /// The slot was free; perform the ticket's request, then `resolve`
    Dispatched(SubmissionTicket),
    /// A submission is already in flight; this one was dropped
    Busy,
    /// The document had nothing to submit; the error is already rendered
    EmptySource,
}

/// Result of a blocking `submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The round trip ran and its outcome is rendered
    Resolved,
    /// A submission was already in flight; this one was dropped
    Busy,
    /// The document had nothing to submit; no request was made
    EmptySource,
}

/// Single-slot submission coordinator
#[derive(Debug, Default)]
pub struct RequestSession {
    pending: Option<SubmissionId>,
}

impl RequestSession {
    /// Creates a session with a free slot
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Returns true while a submission occupies the slot
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a submission: preflight, in-progress entries, ticket
    ///
    /// The check of the pending slot and its occupation happen inside this
    /// one synchronous call, so rapid duplicate invocations from a
    /// cooperative event loop cannot both pass the guard.
    pub fn begin(
        &mut self,
        action: PlaygroundAction,
        document: &EditorDocument,
        backend: CompilerBackend,
        sink: &mut OutputSink,
        board: &mut StatusBoard,
        signal: &mut dyn LoadingSignal,
    ) -> BeginOutcome {
        if self.pending.is_some() {
            return BeginOutcome::Busy;
        }

        if document.is_blank() {
            sink.append(empty_source_message(action), OutputKind::Error);
            fail_status(action, board);
            return BeginOutcome::EmptySource;
        }

        let id = SubmissionId::new();
        self.pending = Some(id);

        sink.clear();
        match action {
            PlaygroundAction::Compile => {
                sink.append(
                    format!("Compiling with {}...", backend.label()),
                    OutputKind::Info,
                );
                board.set_run(RunStatus::Running);
            }
            PlaygroundAction::CheckSyntax => {
                sink.append("Checking syntax...", OutputKind::Info);
                board.set_syntax(SyntaxStatus::Checking);
            }
            PlaygroundAction::Ast => {
                sink.append("Generating Abstract Syntax Tree...", OutputKind::Info);
                board.set_run(RunStatus::Running);
            }
        }
        signal.set_loading(action, true);

        let code = document.submission_text().to_string();
        let request = match action {
            PlaygroundAction::Compile => ActionRequest::Compile(CompileRequest {
                code,
                compiler: Some(backend),
            }),
            PlaygroundAction::CheckSyntax => {
                ActionRequest::CheckSyntax(SyntaxCheckRequest { code })
            }
            PlaygroundAction::Ast => ActionRequest::Ast(AstRequest { code }),
        };

        BeginOutcome::Dispatched(SubmissionTicket { id, request })
    }

    /// Finishes a submission: renders the outcome, frees the slot
    ///
    /// The loading signal is lowered and the slot freed on every branch,
    /// exactly once per ticket. A ticket that no longer matches the pending
    /// slot is stale and ignored.
    pub fn resolve(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<ActionResponse, TransportError>,
        sink: &mut OutputSink,
        board: &mut StatusBoard,
        signal: &mut dyn LoadingSignal,
    ) {
        if self.pending != Some(ticket.id) {
            return;
        }

        let action = ticket.action();
        let outcome = outcome.and_then(|response| {
            if response.action() == action {
                Ok(response)
            } else {
                Err(TransportError::Decode(format!(
                    "response for {} to a {} request",
                    response.action(),
                    action
                )))
            }
        });

        match outcome {
            Ok(ActionResponse::Compile(response)) => {
                render_compile(&response, sink, board);
            }
            Ok(ActionResponse::CheckSyntax(response)) => {
                render_syntax_check(&response, sink, board);
            }
            Ok(ActionResponse::Ast(response)) => {
                render_ast(&response, sink, board);
            }
            Err(error) => {
                sink.append(transport_failure_message(action, &error), OutputKind::Error);
                fail_status(action, board);
            }
        }

        signal.set_loading(action, false);
        self.pending = None;
    }

    /// Runs one full round trip against a transport
    pub fn submit<T: CompilerTransport>(
        &mut self,
        action: PlaygroundAction,
        document: &EditorDocument,
        backend: CompilerBackend,
        transport: &mut T,
        sink: &mut OutputSink,
        board: &mut StatusBoard,
        signal: &mut dyn LoadingSignal,
    ) -> SubmitOutcome {
        let ticket = match self.begin(action, document, backend, sink, board, signal) {
            BeginOutcome::Dispatched(ticket) => ticket,
            BeginOutcome::Busy => return SubmitOutcome::Busy,
            BeginOutcome::EmptySource => return SubmitOutcome::EmptySource,
        };

        let outcome = transport.perform(ticket.request());
        self.resolve(&ticket, outcome, sink, board, signal);
        SubmitOutcome::Resolved
    }
}

fn empty_source_message(action: PlaygroundAction) -> &'static str {
    match action {
        PlaygroundAction::Compile => "Error: No code to compile",
        PlaygroundAction::CheckSyntax => "Error: No code to check",
        PlaygroundAction::Ast => "Error: No code to parse",
    }
}

fn transport_failure_message(action: PlaygroundAction, error: &TransportError) -> String {
    match action {
        PlaygroundAction::Compile => format!("✗ Network error: {}", error),
        PlaygroundAction::CheckSyntax => format!("✗ Error checking syntax: {}", error),
        PlaygroundAction::Ast => format!("✗ Error generating AST: {}", error),
    }
}

/// Sets the failure value of whichever status slot the action drives
fn fail_status(action: PlaygroundAction, board: &mut StatusBoard) {
    match action {
        PlaygroundAction::Compile | PlaygroundAction::Ast => board.set_run(RunStatus::Error),
        PlaygroundAction::CheckSyntax => board.set_syntax(SyntaxStatus::Invalid),
    }
}

fn render_compile(
    response: &compiler_api::CompileResponse,
    sink: &mut OutputSink,
    board: &mut StatusBoard,
) {
    if response.success {
        sink.append("✓ Compilation successful!", OutputKind::Success);
        sink.append(RULE, OutputKind::Info);
        sink.append("Program Output:", OutputKind::Info);
        sink.append(response.output.as_deref().unwrap_or(""), OutputKind::Normal);
        sink.append(RULE, OutputKind::Info);
        if let Some(time) = response.compilation_time {
            sink.append(format!("Compilation time: {}ms", time), OutputKind::Info);
        }
        if let Some(time) = response.execution_time {
            sink.append(
                format!("✓ Execution completed ({}ms)", time),
                OutputKind::Success,
            );
        }
        if let Some(time) = response.total_time {
            sink.append(format!("Total time: {}ms", time), OutputKind::Info);
        }
        board.set_run(RunStatus::Success);
    } else {
        sink.append("✗ Compilation failed!", OutputKind::Error);
        sink.append(RULE, OutputKind::Error);
        sink.append("Errors:", OutputKind::Error);
        sink.append(server_error_text(&response.error), OutputKind::Error);
        board.set_run(RunStatus::Error);
    }
}

fn render_syntax_check(
    response: &compiler_api::SyntaxCheckResponse,
    sink: &mut OutputSink,
    board: &mut StatusBoard,
) {
    if response.valid {
        sink.append("✓ Syntax is valid!", OutputKind::Success);
        if let Some(tokens) = &response.tokens {
            sink.append(RULE, OutputKind::Info);
            sink.append("Tokens found:", OutputKind::Info);
            for token in tokens {
                sink.append(
                    format!("  {}: {}", token.token_type, token.value),
                    OutputKind::Normal,
                );
            }
        }
        board.set_syntax(SyntaxStatus::Valid);
    } else {
        sink.append("✗ Syntax errors found!", OutputKind::Error);
        sink.append(RULE, OutputKind::Error);
        sink.append(server_error_text(&response.error), OutputKind::Error);
        board.set_syntax(SyntaxStatus::Invalid);
    }
}

fn render_ast(
    response: &compiler_api::AstResponse,
    sink: &mut OutputSink,
    board: &mut StatusBoard,
) {
    if response.success {
        sink.append("✓ AST generated successfully!", OutputKind::Success);
        sink.append(RULE, OutputKind::Info);
        sink.append("Abstract Syntax Tree:", OutputKind::Info);
        sink.append(response.ast.as_deref().unwrap_or(""), OutputKind::Normal);
        board.set_run(RunStatus::Success);
    } else {
        sink.append("✗ Failed to generate AST!", OutputKind::Error);
        sink.append(RULE, OutputKind::Error);
        sink.append(server_error_text(&response.error), OutputKind::Error);
        board.set_run(RunStatus::Error);
    }
}

fn server_error_text(error: &Option<String>) -> &str {
    error.as_deref().unwrap_or("Unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler_api::{AstResponse, CompileResponse, SyntaxCheckResponse, TokenInfo};
    use std::collections::VecDeque;

    /// Transport that serves queued outcomes and counts calls
    #[derive(Default)]
    struct MockTransport {
        outcomes: VecDeque<Result<ActionResponse, TransportError>>,
        calls: usize,
    }

    impl MockTransport {
        fn with_outcome(outcome: Result<ActionResponse, TransportError>) -> Self {
            let mut transport = Self::default();
            transport.outcomes.push_back(outcome);
            transport
        }

        fn push(&mut self, outcome: Result<ActionResponse, TransportError>) {
            self.outcomes.push_back(outcome);
        }
    }

    impl CompilerTransport for MockTransport {
        fn perform(
            &mut self,
            _request: &ActionRequest,
        ) -> Result<ActionResponse, TransportError> {
            self.calls += 1;
            self.outcomes
                .pop_front()
                .unwrap_or(Err(TransportError::Network("no outcome queued".into())))
        }
    }

    /// Signal that records every transition
    #[derive(Default)]
    struct RecordingSignal {
        transitions: Vec<(PlaygroundAction, bool)>,
    }

    impl LoadingSignal for RecordingSignal {
        fn set_loading(&mut self, action: PlaygroundAction, loading: bool) {
            self.transitions.push((action, loading));
        }
    }

    fn compile_success(output: &str) -> ActionResponse {
        ActionResponse::Compile(CompileResponse {
            success: true,
            output: Some(output.to_string()),
            error: None,
            compilation_time: None,
            execution_time: Some(45.0),
            total_time: None,
        })
    }

    fn harness() -> (RequestSession, OutputSink, StatusBoard, RecordingSignal) {
        (
            RequestSession::new(),
            OutputSink::new(),
            StatusBoard::new(),
            RecordingSignal::default(),
        )
    }

    fn entry_texts(sink: &OutputSink) -> Vec<&str> {
        sink.entries().iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_empty_document_makes_no_request() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let mut transport = MockTransport::default();
        let doc = EditorDocument::from_text("   \n  ");

        let outcome = session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(outcome, SubmitOutcome::EmptySource);
        assert_eq!(transport.calls, 0);
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.entries()[0].text, "Error: No code to compile");
        assert_eq!(sink.entries()[0].kind, OutputKind::Error);
        assert_eq!(board.run(), RunStatus::Error);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_empty_document_check_marks_syntax_invalid() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let mut transport = MockTransport::default();
        let doc = EditorDocument::new();

        session.submit(
            PlaygroundAction::CheckSyntax,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(sink.entries()[0].text, "Error: No code to check");
        assert_eq!(board.syntax(), SyntaxStatus::Invalid);
        assert_eq!(board.run(), RunStatus::Ready);
    }

    #[test]
    fn test_duplicate_begin_is_dropped() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");

        let first = session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut sink,
            &mut board,
            &mut signal,
        );
        let ticket = match first {
            BeginOutcome::Dispatched(ticket) => ticket,
            other => panic!("Expected a ticket, got {:?}", other),
        };

        // A doubled shortcut while the first call is outstanding
        let second = session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert_eq!(second, BeginOutcome::Busy);

        // Only the first begin touched the sink and the signal
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(signal.transitions.len(), 1);

        session.resolve(
            &ticket,
            Ok(compile_success("hi")),
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert!(!session.is_pending());
    }

    #[test]
    fn test_submit_twice_sends_exactly_one_request_while_pending() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");

        let ticket = match session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut sink,
            &mut board,
            &mut signal,
        ) {
            BeginOutcome::Dispatched(ticket) => ticket,
            other => panic!("Expected a ticket, got {:?}", other),
        };

        // Second submit arrives before the first resolves
        let mut transport = MockTransport::with_outcome(Ok(compile_success("hi")));
        let outcome = session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(transport.calls, 0);

        session.resolve(
            &ticket,
            Ok(compile_success("hi")),
            &mut sink,
            &mut board,
            &mut signal,
        );
    }

    #[test]
    fn test_compile_success_renders_output_and_timing() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() { out(\"hi\") }");
        let mut transport = MockTransport::with_outcome(Ok(compile_success("hi")));

        let outcome = session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(outcome, SubmitOutcome::Resolved);
        let texts = entry_texts(&sink);
        assert_eq!(texts[0], "Compiling with Native C++...");
        assert_eq!(texts[1], "✓ Compilation successful!");
        assert!(texts.contains(&"hi"));
        assert!(texts.contains(&"✓ Execution completed (45ms)"));
        assert_eq!(board.run(), RunStatus::Success);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_compile_semantic_failure_surfaces_server_text() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {");
        let mut transport = MockTransport::with_outcome(Ok(ActionResponse::Compile(
            CompileResponse {
                success: false,
                output: None,
                error: Some("line 3: unexpected token".to_string()),
                compilation_time: None,
                execution_time: None,
                total_time: None,
            },
        )));

        session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.run(), RunStatus::Error);
        let texts = entry_texts(&sink);
        assert!(texts.contains(&"line 3: unexpected token"));
        let error_entry = sink
            .entries()
            .iter()
            .find(|e| e.text == "line 3: unexpected token")
            .unwrap();
        assert_eq!(error_entry.kind, OutputKind::Error);
    }

    #[test]
    fn test_syntax_check_valid_lists_tokens() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::with_outcome(Ok(ActionResponse::CheckSyntax(
            SyntaxCheckResponse {
                valid: true,
                tokens: Some(vec![
                    TokenInfo {
                        token_type: "KEYWORD".to_string(),
                        value: "fn".to_string(),
                        line: Some(1),
                        column: Some(1),
                    },
                    TokenInfo {
                        token_type: "IDENT".to_string(),
                        value: "main".to_string(),
                        line: Some(1),
                        column: Some(4),
                    },
                ]),
                error: None,
            },
        )));

        session.submit(
            PlaygroundAction::CheckSyntax,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.syntax(), SyntaxStatus::Valid);
        let texts = entry_texts(&sink);
        assert_eq!(texts[0], "Checking syntax...");
        assert!(texts.contains(&"  KEYWORD: fn"));
        assert!(texts.contains(&"  IDENT: main"));
    }

    #[test]
    fn test_syntax_check_invalid_marks_status() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn {");
        let mut transport = MockTransport::with_outcome(Ok(ActionResponse::CheckSyntax(
            SyntaxCheckResponse {
                valid: false,
                tokens: None,
                error: Some("Line 1, Column 4: expected identifier".to_string()),
            },
        )));

        session.submit(
            PlaygroundAction::CheckSyntax,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.syntax(), SyntaxStatus::Invalid);
        assert!(entry_texts(&sink).contains(&"Line 1, Column 4: expected identifier"));
    }

    #[test]
    fn test_ast_success_renders_tree() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::with_outcome(Ok(ActionResponse::Ast(AstResponse {
            success: true,
            ast: Some("Program\n  Function: main".to_string()),
            error: None,
        })));

        session.submit(
            PlaygroundAction::Ast,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.run(), RunStatus::Success);
        let texts = entry_texts(&sink);
        assert_eq!(texts[0], "Generating Abstract Syntax Tree...");
        assert!(texts.contains(&"Program\n  Function: main"));
    }

    #[test]
    fn test_transport_failure_renders_network_error() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::with_outcome(Err(TransportError::Http {
            status: 502,
            reason: "Bad Gateway".to_string(),
        }));

        session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.run(), RunStatus::Error);
        assert!(entry_texts(&sink).contains(&"✗ Network error: HTTP 502: Bad Gateway"));
        assert!(!session.is_pending());
    }

    #[test]
    fn test_slot_frees_after_every_outcome() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::default();
        transport.push(Err(TransportError::Network("connection refused".into())));
        transport.push(Ok(compile_success("hi")));

        session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert!(!session.is_pending());

        // The failed round trip does not block the next one
        let outcome = session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert_eq!(outcome, SubmitOutcome::Resolved);
        assert_eq!(transport.calls, 2);
        assert_eq!(board.run(), RunStatus::Success);
    }

    #[test]
    fn test_loading_signal_raised_and_lowered_once() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::with_outcome(Ok(compile_success("hi")));

        session.submit(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(
            signal.transitions,
            vec![
                (PlaygroundAction::Compile, true),
                (PlaygroundAction::Compile, false),
            ]
        );
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");

        let ticket = match session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Native,
            &mut sink,
            &mut board,
            &mut signal,
        ) {
            BeginOutcome::Dispatched(ticket) => ticket,
            other => panic!("Expected a ticket, got {:?}", other),
        };

        session.resolve(
            &ticket,
            Ok(compile_success("hi")),
            &mut sink,
            &mut board,
            &mut signal,
        );
        let entries_after_first = sink.entries().len();
        let signals_after_first = signal.transitions.len();

        // A duplicate resolve for the same ticket must do nothing
        session.resolve(
            &ticket,
            Ok(compile_success("again")),
            &mut sink,
            &mut board,
            &mut signal,
        );
        assert_eq!(sink.entries().len(), entries_after_first);
        assert_eq!(signal.transitions.len(), signals_after_first);
    }

    #[test]
    fn test_mismatched_response_variant_is_transport_failure() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        let mut transport = MockTransport::with_outcome(Ok(ActionResponse::Ast(AstResponse {
            success: true,
            ast: Some("Program".to_string()),
            error: None,
        })));

        session.submit(
            PlaygroundAction::CheckSyntax,
            &doc,
            CompilerBackend::Native,
            &mut transport,
            &mut sink,
            &mut board,
            &mut signal,
        );

        assert_eq!(board.syntax(), SyntaxStatus::Invalid);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_begin_clears_previous_output() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("fn main() {}");
        sink.append("old run output", OutputKind::Normal);

        session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Interpreter,
            &mut sink,
            &mut board,
            &mut signal,
        );

        let texts = entry_texts(&sink);
        assert_eq!(texts, vec!["Compiling with Python Interpreter..."]);
        assert_eq!(board.run(), RunStatus::Running);
    }

    #[test]
    fn test_ticket_request_uses_trimmed_text_and_backend() {
        let (mut session, mut sink, mut board, mut signal) = harness();
        let doc = EditorDocument::from_text("  fn main() {}\n");

        let ticket = match session.begin(
            PlaygroundAction::Compile,
            &doc,
            CompilerBackend::Interpreter,
            &mut sink,
            &mut board,
            &mut signal,
        ) {
            BeginOutcome::Dispatched(ticket) => ticket,
            other => panic!("Expected a ticket, got {:?}", other),
        };

        match ticket.request() {
            ActionRequest::Compile(req) => {
                assert_eq!(req.code, "fn main() {}");
                assert_eq!(req.compiler, Some(CompilerBackend::Interpreter));
            }
            other => panic!("Expected a compile request, got {:?}", other),
        }
    }
}
