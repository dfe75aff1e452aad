#![no_std]

//! # Output Service
//!
//! The output stream and status indicators for the playground client.
//!
//! ## Philosophy
//!
//! - **Views, not streams**: Hosts render revisioned frames, never raw bytes
//! - **Append-only**: Entries are only ever added or cleared as a whole; no
//!   partial deletion, and an entry's kind never changes after insertion
//! - **Last write wins**: Status slots are plain values, not state machines;
//!   any caller may set any value and it is immediately reflected
//! - **Testable**: Frames are serializable and can be snapshot-tested
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A terminal or ANSI layer
//! - A logging framework
//! - A widget toolkit

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use playground_types::{OutputEntry, OutputKind, RunStatus, SyntaxStatus};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the output stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFrame {
    /// Monotonic revision, bumped on every mutation
    pub revision: u64,
    /// Entries in insertion order
    pub entries: Vec<OutputEntry>,
}

/// Append-only typed output stream
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    entries: Vec<OutputEntry>,
    revision: u64,
}

impl OutputSink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            revision: 0,
        }
    }

    /// Appends one entry with the given kind
    pub fn append(&mut self, text: impl Into<String>, kind: OutputKind) {
        self.push(OutputEntry::new(text, kind));
    }

    /// Appends a prebuilt entry
    pub fn push(&mut self, entry: OutputEntry) {
        self.entries.push(entry);
        self.revision += 1;
    }

    /// Empties the stream
    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    /// Current revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the stream is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> OutputFrame {
        OutputFrame {
            revision: self.revision,
            entries: self.entries.clone(),
        }
    }
}

/// Immutable snapshot of both status slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFrame {
    /// Monotonic revision, bumped on every mutation
    pub revision: u64,
    /// Syntax indicator value
    pub syntax: SyntaxStatus,
    /// Run indicator value
    pub run: RunStatus,
}

/// The two user-visible status indicators
///
/// Each slot is a finite value with last-write-wins semantics; there is no
/// enforced transition graph.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    syntax: SyntaxStatus,
    run: RunStatus,
    revision: u64,
}

impl StatusBoard {
    /// Creates a board with both slots at `Ready`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current syntax indicator value
    pub fn syntax(&self) -> SyntaxStatus {
        self.syntax
    }

    /// Current run indicator value
    pub fn run(&self) -> RunStatus {
        self.run
    }

    /// Sets the syntax indicator
    pub fn set_syntax(&mut self, status: SyntaxStatus) {
        self.syntax = status;
        self.revision += 1;
    }

    /// Sets the run indicator
    pub fn set_run(&mut self, status: RunStatus) {
        self.run = status;
        self.revision += 1;
    }

    /// Returns both indicators to `Ready`
    pub fn reset(&mut self) {
        self.syntax = SyntaxStatus::Ready;
        self.run = RunStatus::Ready;
        self.revision += 1;
    }

    /// Current revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> StatusFrame {
        StatusFrame {
            revision: self.revision,
            syntax: self.syntax,
            run: self.run,
        }
    }
}
