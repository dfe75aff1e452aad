//! # Wire Contract Tests
//!
//! "Golden" tests for the compiler service wire contract, so the JSON the
//! client sends and accepts does not drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The wire shapes are written out as JSON
//!   literals, not re-derived from the same serde code they guard
//! - **Testability first**: Contract tests fail when a field is renamed,
//!   dropped, or changes its optionality
//!
//! ## Structure
//!
//! One module per endpoint. Each pins the endpoint path, the request body
//! shape, and the response bodies the server is known to produce.

pub mod ast;
pub mod check_syntax;
pub mod compile;

/// Common helpers for contract validation
pub mod test_helpers {
    use serde_json::Value;

    /// Parses a JSON body, failing the test with the body on error
    pub fn parse(body: &str) -> Value {
        serde_json::from_str(body)
            .unwrap_or_else(|e| panic!("Body is not valid JSON ({}): {}", e, body))
    }

    /// Verifies an object carries exactly the expected keys
    pub fn verify_keys(value: &Value, expected: &[&str]) {
        let object = value.as_object().expect("Body is not a JSON object");
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        let mut expected: Vec<&str> = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(
            keys, expected,
            "Wire keys changed: expected {:?}, got {:?}",
            expected, keys
        );
    }
}
