#![no_std]

//! # Example Catalog
//!
//! The built-in Orion example programs offered by the playground.
//!
//! ## Philosophy
//!
//! - **Static data**: Examples are immutable literals registered at
//!   construction; there is no lifecycle beyond existence
//! - **Miss is not an error**: Looking up an unknown id returns `None`;
//!   callers treat it as a no-op and must not disturb the current document

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier for an example program
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleId(String);

impl ExampleId {
    /// Creates a new example ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExampleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One example program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Identifier shown to the user
    pub id: ExampleId,
    /// Complete source text
    pub source_text: String,
}

impl Example {
    /// Creates a new example
    pub fn new(id: impl Into<ExampleId>, source_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_text: source_text.into(),
        }
    }
}

const HELLO_SOURCE: &str = r#"// Hello World in Orion
fn main() {
    out("Hello, Orion World!")
    out("Fast as C, readable as Python!")
}"#;

const FIBONACCI_SOURCE: &str = r#"// Fibonacci sequence in Orion
fn fibonacci(n) {
    if n <= 1 {
        return n
    }
    return fibonacci(n - 1) + fibonacci(n - 2)
}

fn main() {
    n = 10
    out("Fibonacci sequence:")

    for i = 0; i < n; i = i + 1 {
        result = fibonacci(i)
        out("F(" + str(i) + ") = " + str(result))
    }
}"#;

/// Registry of example programs
pub struct ExampleCatalog {
    examples: Vec<Example>,
}

impl ExampleCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
        }
    }

    /// Creates a catalog holding the built-in examples
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Example::new("hello", HELLO_SOURCE));
        catalog.register(Example::new("fibonacci", FIBONACCI_SOURCE));
        catalog
    }

    /// Registers an example
    pub fn register(&mut self, example: Example) {
        self.examples.push(example);
    }

    /// Looks up an example by id
    ///
    /// Unknown ids return `None`; the catalog never errors on a miss.
    pub fn get(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id.as_str() == id)
    }

    /// Registered ids, in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.id.as_str()).collect()
    }

    /// Number of registered examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if no examples are registered
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
