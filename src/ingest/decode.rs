use thiserror::Error;

use crate::summary::summary_model::TestRunSummary;

// ============================================================================
// Summary ingestion — two-stage decode (syntax, then shape)
// ============================================================================

/// Why a raw upload could not be turned into a [`TestRunSummary`].
///
/// Syntax and shape failures are distinct on purpose: "this is not JSON" and
/// "this is JSON but not a test summary" call for different fixes on the
/// client side.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Empty or whitespace-only input.
    #[error("empty input: provide a non-empty JSON document")]
    Empty,

    /// The input is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(serde_json::Error),

    /// Valid JSON, but it does not match the test summary shape.
    #[error("JSON is valid but does not match the expected test summary format: {0}")]
    Shape(serde_json::Error),
}

/// Decode a raw uploaded document into a [`TestRunSummary`].
///
/// Validates in two stages: a generic JSON syntax parse first, then a
/// structural match against the summary shape, so callers can report the two
/// failure modes distinctly.
pub fn decode_summary(raw: &str) -> Result<TestRunSummary, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(DecodeError::Syntax)?;

    serde_json::from_value(value).map_err(DecodeError::Shape)
}
