//! `/check-syntax` endpoint contract
//!
//! These tests define the stable wire contract for syntax checks.
