use std::collections::HashMap;

use crate::summary::summary_model::{
    SuiteResult, TestRunSummary, STATUS_FAILED, STATUS_PASSED, STATUS_PENDING,
};

// ============================================================================
// View filter — retain matching suites/assertions, recompute counters
// ============================================================================

/// View-filter toggles parsed from the summary page's query string.
///
/// Toggles combine conjunctively: a suite must survive every requested
/// status filter. `only_failed_assertions` additionally prunes the retained
/// suites down to their failed assertions.
///
/// `only_failed_files` is accepted in the query string but takes part in no
/// retention decision — it exists for compatibility with clients that send
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryFilter {
    pub only_failed_files: bool,
    pub only_failed_tests: bool,
    pub only_failed_assertions: bool,
    pub only_passed_tests: bool,
    pub only_pending_tests: bool,
}

impl SummaryFilter {
    /// Parse filter toggles from query parameters. A toggle activates only
    /// on the exact value `"true"`; anything else (or absence) leaves it off.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let flag = |name: &str| query.get(name).map(String::as_str) == Some("true");
        Self {
            only_failed_files: flag("onlyFailedFiles"),
            only_failed_tests: flag("onlyFailedTests"),
            only_failed_assertions: flag("onlyFailedAssertions"),
            only_passed_tests: flag("onlyPassedTests"),
            only_pending_tests: flag("onlyPendingTests"),
        }
    }

    /// Whether no toggle is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply a view filter to a summary, producing a new summary containing
/// exactly the matching suites/assertions with every counter recomputed from
/// the retained data. Pure: the input is never mutated.
///
/// Suite inclusion is decided per suite against its *unfiltered* status and
/// assertions, in this order:
///
/// 1. status filters (failed/passed/pending) each exclude on mismatch;
/// 2. `only_failed_assertions` force-includes a suite whose own status is
///    "failed" (overriding step 1), then excludes any suite with zero failed
///    assertions (overriding the force-include).
///
/// The step-2 override order is deliberate and load-bearing: a failed-status
/// suite whose failure is not assertion-level (e.g. a setup error) is still
/// dropped by the assertion check.
pub fn filter_summary(filter: &SummaryFilter, summary: &TestRunSummary) -> TestRunSummary {
    if filter.is_empty() {
        return summary.clone();
    }

    let mut retained: Vec<SuiteResult> = Vec::new();

    for suite in &summary.test_results {
        let mut include = true;

        if filter.only_failed_tests && suite.status != STATUS_FAILED {
            include = false;
        }
        if filter.only_passed_tests && suite.status != STATUS_PASSED {
            include = false;
        }
        if filter.only_pending_tests && suite.status != STATUS_PENDING {
            include = false;
        }

        if filter.only_failed_assertions {
            let has_failed = suite.has_failed_assertions();
            if suite.status == STATUS_FAILED {
                include = true;
            }
            if !has_failed {
                include = false;
            }
        }

        if include {
            let mut kept = suite.clone();
            if filter.only_failed_assertions {
                kept.assertion_results
                    .retain(|a| a.status == STATUS_FAILED);
            }
            retained.push(kept);
        }
    }

    recompute_counters(summary, retained)
}

/// Rebuild the aggregate counters strictly from the retained suite list.
///
/// Runtime-error-suite and todo-test counts pass through from the source:
/// neither is derivable from assertion-level data.
fn recompute_counters(source: &TestRunSummary, retained: Vec<SuiteResult>) -> TestRunSummary {
    let mut out = TestRunSummary {
        num_failed_test_suites: 0,
        num_failed_tests: 0,
        num_passed_test_suites: 0,
        num_passed_tests: 0,
        num_pending_test_suites: 0,
        num_pending_tests: 0,
        num_runtime_error_test_suites: source.num_runtime_error_test_suites,
        num_todo_tests: source.num_todo_tests,
        num_total_test_suites: retained.len(),
        test_results: retained,
    };

    for suite in &out.test_results {
        match suite.status.as_str() {
            STATUS_PASSED => out.num_passed_test_suites += 1,
            STATUS_FAILED => out.num_failed_test_suites += 1,
            STATUS_PENDING => out.num_pending_test_suites += 1,
            _ => {}
        }

        for assertion in &suite.assertion_results {
            match assertion.status.as_str() {
                STATUS_PASSED => out.num_passed_tests += 1,
                STATUS_FAILED => out.num_failed_tests += 1,
                STATUS_PENDING => out.num_pending_tests += 1,
                _ => {}
            }
        }
    }

    out
}
