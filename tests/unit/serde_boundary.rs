//! Serde boundary: persisted data re-enters only through verify.

use attest::{NonEmpty, Prime, Refined, Signup, ValidSignup, Whole};

#[test]
fn refined_serializes_as_the_bare_value() {
    let whole = Refined::<f64, Whole>::verify(3.0).unwrap();
    assert_eq!(serde_json::to_string(&whole).unwrap(), "3.0");
}

#[test]
fn deserialization_runs_the_predicate() {
    let ok: Result<Refined<f64, Whole>, _> = serde_json::from_str("3.0");
    assert!(ok.is_ok());

    let err: Result<Refined<f64, Whole>, _> = serde_json::from_str("3.5");
    let message = err.unwrap_err().to_string();
    assert!(message.contains("whole"), "unexpected message: {message}");
}

#[test]
fn round_trip_preserves_the_value() {
    let prime = Refined::<u64, Prime>::verify(13).unwrap();
    let json = serde_json::to_string(&prime).unwrap();
    let back: Refined<u64, Prime> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, prime);
}

#[test]
fn tampered_records_fail_to_load() {
    let json = r#"{"username":"","age":30}"#;
    let result: Result<Refined<Signup, ValidSignup>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn sequences_load_through_the_same_gate() {
    let ok: Result<Refined<Vec<i32>, NonEmpty>, _> = serde_json::from_str("[1,2]");
    assert!(ok.is_ok());

    let err: Result<Refined<Vec<i32>, NonEmpty>, _> = serde_json::from_str("[]");
    assert!(err.is_err());
}
