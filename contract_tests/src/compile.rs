//! `/compile` endpoint contract
//!
//! These tests define the stable wire contract for compile submissions.
