//! `/ast` endpoint contract
//!
//! These tests define the stable wire contract for AST rendering.
