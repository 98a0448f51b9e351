use jest_dash::ingest::decode::{decode_summary, DecodeError};

// ============================================================================
// Fixtures
// ============================================================================

const VALID_SUMMARY: &str = r#"{
  "numFailedTestSuites": 1,
  "numFailedTests": 1,
  "numPassedTestSuites": 1,
  "numPassedTests": 3,
  "numPendingTestSuites": 0,
  "numPendingTests": 0,
  "numRuntimeErrorTestSuites": 0,
  "numTodoTests": 0,
  "numTotalTestSuites": 2,
  "testResults": [
    {
      "startTime": 1700000000000,
      "endTime": 1700000002000,
      "name": "/repo/src/math.test.js",
      "status": "passed",
      "message": "",
      "summary": "",
      "assertionResults": [
        {
          "fullName": "math adds numbers",
          "title": "adds numbers",
          "status": "passed",
          "invocations": 1,
          "location": null,
          "numPassingAsserts": 2,
          "failureMessages": [],
          "failureDetails": [],
          "retryReasons": []
        }
      ]
    },
    {
      "startTime": 1700000002000,
      "endTime": 1700000004000,
      "name": "/repo/src/io.test.js",
      "status": "failed",
      "message": "● reads file",
      "summary": "",
      "assertionResults": [
        {
          "fullName": "io reads file",
          "title": "reads file",
          "status": "failed",
          "failureMessages": ["expect(received).toBe(expected)"],
          "failureDetails": [{"matcherResult": {"name": "toBe", "pass": false}}]
        }
      ]
    }
  ]
}"#;

// ============================================================================
// 1. Happy path
// ============================================================================

#[test]
fn decodes_full_summary() {
    let summary = decode_summary(VALID_SUMMARY).expect("valid summary should decode");

    assert_eq!(summary.num_total_test_suites, 2);
    assert_eq!(summary.num_passed_tests, 3);
    assert_eq!(summary.test_results.len(), 2);
    assert_eq!(summary.test_results[0].status, "passed");
    assert_eq!(
        summary.test_results[1].assertion_results[0].failure_messages.len(),
        1
    );
}

#[test]
fn missing_leaf_fields_default() {
    // The second suite's assertion omits invocations, location,
    // numPassingAsserts, and retryReasons.
    let summary = decode_summary(VALID_SUMMARY).unwrap();
    let assertion = &summary.test_results[1].assertion_results[0];

    assert_eq!(assertion.invocations, 0);
    assert_eq!(assertion.location, None);
    assert_eq!(assertion.num_passing_asserts, 0);
    assert!(assertion.retry_reasons.is_empty());
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let padded = format!("\n  {}\n\t", VALID_SUMMARY);
    assert!(decode_summary(&padded).is_ok());
}

// ============================================================================
// 2. Empty input
// ============================================================================

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(decode_summary(""), Err(DecodeError::Empty)));
    assert!(matches!(decode_summary("  \n\t "), Err(DecodeError::Empty)));
}

// ============================================================================
// 3. Syntax vs shape failures are distinct
// ============================================================================

#[test]
fn malformed_json_is_a_syntax_error() {
    let err = decode_summary("{not json").unwrap_err();
    assert!(matches!(err, DecodeError::Syntax(_)));
    assert!(err.to_string().starts_with("invalid JSON"));
}

#[test]
fn wrong_shape_is_a_shape_error() {
    let err = decode_summary(r#"{"foo": 1}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Shape(_)));
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn valid_json_array_is_a_shape_error() {
    let err = decode_summary("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, DecodeError::Shape(_)));
}
