use serde::{Deserialize, Serialize};

// ============================================================================
// Test-run summary model — the shape Jest emits with `--json`
// ============================================================================

/// Suite status tag for a suite that completed with at least one failure.
pub const STATUS_FAILED: &str = "failed";
/// Suite/assertion status tag for a fully passing result.
pub const STATUS_PASSED: &str = "passed";
/// Status tag for skipped/pending results.
pub const STATUS_PENDING: &str = "pending";

/// One complete test run: aggregate counters plus per-suite results.
///
/// The counters are derived data — after any filtering operation they must
/// agree with the content of `test_results`. Frameworks may emit status tags
/// beyond passed/failed/pending, so statuses stay free-form strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunSummary {
    pub num_failed_test_suites: usize,
    pub num_failed_tests: usize,
    pub num_passed_test_suites: usize,
    pub num_passed_tests: usize,
    pub num_pending_test_suites: usize,
    pub num_pending_tests: usize,
    pub num_runtime_error_test_suites: usize,
    pub num_todo_tests: usize,
    pub num_total_test_suites: usize,

    /// Per-file suite results, in run order.
    pub test_results: Vec<SuiteResult>,
}

/// One test file's aggregate outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteResult {
    #[serde(default)]
    pub start_time: i64,

    #[serde(default)]
    pub end_time: i64,

    /// Path of the test file.
    pub name: String,

    /// "passed", "failed", "pending", or a framework-defined tag.
    pub status: String,

    /// Free-text failure output for the whole suite.
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub summary: String,

    /// Individual test cases, in declaration order.
    #[serde(default)]
    pub assertion_results: Vec<AssertionResult>,
}

/// One individual test case within a suite.
///
/// `location`, `failure_details`, and `retry_reasons` are opaque JSON:
/// downstream only displays them, so their inner structure is not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    /// Concatenated describe-block path plus title.
    pub full_name: String,

    /// Short test title.
    pub title: String,

    /// "passed", "failed", "pending", or "todo".
    pub status: String,

    #[serde(default)]
    pub invocations: usize,

    #[serde(default)]
    pub location: Option<serde_json::Value>,

    #[serde(default)]
    pub num_passing_asserts: usize,

    #[serde(default)]
    pub failure_messages: Vec<String>,

    /// Matcher details (name, expected, actual, pass flag) — kept opaque.
    #[serde(default)]
    pub failure_details: Vec<serde_json::Value>,

    #[serde(default)]
    pub retry_reasons: Vec<serde_json::Value>,
}

impl SuiteResult {
    /// Whether any assertion in this suite failed.
    pub fn has_failed_assertions(&self) -> bool {
        self.assertion_results
            .iter()
            .any(|a| a.status == STATUS_FAILED)
    }

    /// Wall-clock duration of the suite in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.end_time - self.start_time).max(0)
    }
}
