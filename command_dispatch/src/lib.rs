//! # Command Dispatch
//!
//! Routes UI actions and keyboard chords onto the playground components.
//!
//! ## Philosophy
//!
//! - **Typed commands, not strings**: Every user action is a
//!   [`PlaygroundCommand`] value; chords map to commands, commands map to
//!   component calls
//! - **The dispatcher owns the wiring**: UI code never reaches into the
//!   document, sink, board, or session directly
//! - **Consumed chords are reported**: `handle_key` tells the host whether a
//!   chord was taken, so the host can suppress its native binding for that
//!   combination

pub mod key;

use compiler_api::CompilerTransport;
use editor_buffer::EditorDocument;
use example_catalog::{ExampleCatalog, ExampleId};
use key::{KeyChord, Keymap};
use playground_types::{CompilerBackend, OutputKind, PlaygroundAction};
use services_output::{OutputSink, StatusBoard};
use services_session::{LoadingSignal, RequestSession, SubmitOutcome};

/// One user-level action
#[derive(Debug, Clone, PartialEq)]
pub enum PlaygroundCommand {
    /// Replace the document with a catalog example
    LoadExample(ExampleId),
    /// Empty the document
    ClearEditor,
    /// Compile and run the document
    Compile,
    /// Validate syntax only
    CheckSyntax,
    /// Render the abstract syntax tree
    ShowAst,
    /// Empty the output stream
    ClearOutput,
    /// Select the execution backend for later compiles
    SetBackend(CompilerBackend),
}

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command ran
    Done,
    /// The command referred to something unknown and was silently dropped
    Ignored,
    /// The command went to the request session
    Submission(SubmitOutcome),
}

/// Owner and router of the playground session state
pub struct CommandDispatcher {
    catalog: ExampleCatalog,
    document: EditorDocument,
    sink: OutputSink,
    board: StatusBoard,
    session: RequestSession,
    backend: CompilerBackend,
    keymap: Keymap,
}

impl CommandDispatcher {
    /// Creates a dispatcher with the built-in catalog and the `hello`
    /// example loaded, matching the playground's page-load state
    pub fn new() -> Self {
        let mut dispatcher = Self {
            catalog: ExampleCatalog::builtin(),
            document: EditorDocument::new(),
            sink: OutputSink::new(),
            board: StatusBoard::new(),
            session: RequestSession::new(),
            backend: CompilerBackend::default(),
            keymap: Keymap::default(),
        };
        dispatcher.load_example(&ExampleId::new("hello"));
        dispatcher
    }

    /// The editor document
    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    /// Replaces the document text (user edit)
    ///
    /// Edits do not reset the status indicators; only load and clear
    /// operations do.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.document.set_text(text);
    }

    /// The output stream
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// The status indicators
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }

    /// The example catalog
    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    /// The selected execution backend
    pub fn backend(&self) -> CompilerBackend {
        self.backend
    }

    /// True while a submission is in flight
    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    /// Executes one command
    pub fn execute<T: CompilerTransport>(
        &mut self,
        command: PlaygroundCommand,
        transport: &mut T,
        signal: &mut dyn LoadingSignal,
    ) -> DispatchOutcome {
        match command {
            PlaygroundCommand::LoadExample(id) => {
                if self.load_example(&id) {
                    DispatchOutcome::Done
                } else {
                    DispatchOutcome::Ignored
                }
            }
            PlaygroundCommand::ClearEditor => {
                self.document.clear();
                self.sink.clear();
                self.board.reset();
                self.sink.append("Editor cleared.", OutputKind::Info);
                DispatchOutcome::Done
            }
            PlaygroundCommand::Compile => self.submit(PlaygroundAction::Compile, transport, signal),
            PlaygroundCommand::CheckSyntax => {
                self.submit(PlaygroundAction::CheckSyntax, transport, signal)
            }
            PlaygroundCommand::ShowAst => self.submit(PlaygroundAction::Ast, transport, signal),
            PlaygroundCommand::ClearOutput => {
                self.sink.clear();
                DispatchOutcome::Done
            }
            PlaygroundCommand::SetBackend(backend) => {
                self.backend = backend;
                DispatchOutcome::Done
            }
        }
    }

    /// Dispatches a keyboard chord
    ///
    /// Returns `Some` when the chord was bound and consumed; the host must
    /// then suppress its native behavior for that combination. `None` means
    /// the chord is free for the host to handle.
    pub fn handle_key<T: CompilerTransport>(
        &mut self,
        chord: KeyChord,
        transport: &mut T,
        signal: &mut dyn LoadingSignal,
    ) -> Option<DispatchOutcome> {
        let command = self.keymap.lookup(&chord)?;
        Some(self.execute(command, transport, signal))
    }

    /// Loads an example into the document; false on an unknown id
    ///
    /// A miss leaves the document, stream, and indicators untouched.
    fn load_example(&mut self, id: &ExampleId) -> bool {
        let source = match self.catalog.get(id.as_str()) {
            Some(example) => example.source_text.clone(),
            None => return false,
        };

        self.document.set_text(source);
        self.sink.clear();
        self.board.reset();
        self.sink
            .append(format!("Example loaded: {}", id), OutputKind::Info);
        true
    }

    fn submit<T: CompilerTransport>(
        &mut self,
        action: PlaygroundAction,
        transport: &mut T,
        signal: &mut dyn LoadingSignal,
    ) -> DispatchOutcome {
        let outcome = self.session.submit(
            action,
            &self.document,
            self.backend,
            transport,
            &mut self.sink,
            &mut self.board,
            signal,
        );
        DispatchOutcome::Submission(outcome)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
