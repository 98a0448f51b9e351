use crate::summary::summary_model::{
    SuiteResult, TestRunSummary, STATUS_FAILED, STATUS_PASSED, STATUS_PENDING,
};

// ============================================================================
// Summary dashboard — self-contained HTML, inline CSS
// ============================================================================

/// Render the (possibly filtered) summary as a self-contained HTML page.
///
/// Features:
/// - Green/red header based on overall pass/fail
/// - Counter grid for all nine aggregate counters
/// - Filter toolbar linking back to `/summary` with each view filter
/// - Each suite in its own section, assertions listed with status badges
/// - Failure messages rendered verbatim in `<pre>` blocks
pub fn render_dashboard(summary: &TestRunSummary) -> String {
    let all_green =
        summary.num_failed_test_suites == 0 && summary.num_runtime_error_test_suites == 0;
    let header_color = if all_green { "#4CAF50" } else { "#f44336" };
    let status_text = if all_green {
        "ALL TEST SUITES PASSED"
    } else {
        "SOME TEST SUITES FAILED"
    };

    let mut suites = String::new();
    for suite in &summary.test_results {
        suites.push_str(&render_suite(suite));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Test Run Summary</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: {header_color}; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
.counters {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; margin-bottom: 16px; }}
.counter {{ background: white; border-radius: 6px; padding: 10px 14px; }}
.counter .num {{ font-size: 22px; font-weight: bold; }}
.counter .label {{ color: #666; font-size: 12px; }}
.filters {{ margin-bottom: 16px; }}
.filters a {{ display: inline-block; background: white; border-radius: 4px; padding: 6px 12px; margin-right: 6px; font-size: 13px; color: #1976D2; text-decoration: none; }}
.suite {{ background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; border-left: 4px solid #ccc; }}
.suite.passed {{ border-left-color: #4CAF50; }}
.suite.failed {{ border-left-color: #f44336; }}
.suite.pending {{ border-left-color: #FF9800; }}
.suite h3 {{ margin: 0 0 8px 0; font-size: 15px; word-break: break-all; }}
.suite p {{ margin: 4px 0; color: #666; font-size: 13px; }}
.assertion {{ padding: 6px 0; border-top: 1px solid #eee; font-size: 14px; }}
.badge {{ display: inline-block; border-radius: 3px; padding: 1px 7px; font-size: 11px; color: white; margin-right: 8px; text-transform: uppercase; }}
.badge.passed {{ background: #4CAF50; }}
.badge.failed {{ background: #f44336; }}
.badge.pending {{ background: #FF9800; }}
.badge.other {{ background: #9E9E9E; }}
.full-name {{ color: #999; font-size: 12px; margin-left: 8px; }}
pre.failure {{ background: #fff3f3; color: #c62828; font-size: 12px; padding: 8px 10px; border-radius: 4px; overflow-x: auto; white-space: pre-wrap; }}
</style>
</head>
<body>
<div class="header">
<h1>{status_text}</h1>
<p>{total} suites — {passed_suites} passed, {failed_suites} failed, {pending_suites} pending</p>
</div>
<div class="content">
<div class="counters">
{counters}
</div>
<div class="filters">
<a href="/summary">All</a>
<a href="/summary?onlyFailedTests=true">Failed suites</a>
<a href="/summary?onlyPassedTests=true">Passed suites</a>
<a href="/summary?onlyPendingTests=true">Pending suites</a>
<a href="/summary?onlyFailedAssertions=true">Failed assertions</a>
<a href="/">Upload another</a>
</div>
{suites}
</div>
</body>
</html>"##,
        header_color = header_color,
        status_text = status_text,
        total = summary.num_total_test_suites,
        passed_suites = summary.num_passed_test_suites,
        failed_suites = summary.num_failed_test_suites,
        pending_suites = summary.num_pending_test_suites,
        counters = render_counters(summary),
        suites = suites,
    )
}

fn render_counters(summary: &TestRunSummary) -> String {
    let cells: [(usize, &str); 9] = [
        (summary.num_total_test_suites, "Total suites"),
        (summary.num_passed_test_suites, "Passed suites"),
        (summary.num_failed_test_suites, "Failed suites"),
        (summary.num_pending_test_suites, "Pending suites"),
        (summary.num_runtime_error_test_suites, "Runtime-error suites"),
        (summary.num_passed_tests, "Passed tests"),
        (summary.num_failed_tests, "Failed tests"),
        (summary.num_pending_tests, "Pending tests"),
        (summary.num_todo_tests, "Todo tests"),
    ];

    let mut out = String::new();
    for (num, label) in cells {
        out.push_str(&format!(
            "<div class=\"counter\"><div class=\"num\">{}</div><div class=\"label\">{}</div></div>\n",
            num, label
        ));
    }
    out
}

fn render_suite(suite: &SuiteResult) -> String {
    let mut out = format!(
        r#"<div class="suite {class}">
<h3><span class="badge {class}">{status}</span>{name}</h3>
<p>{count} assertions | {duration} ms</p>
"#,
        class = status_class(&suite.status),
        status = escape_html(&suite.status),
        name = escape_html(&suite.name),
        count = suite.assertion_results.len(),
        duration = suite.duration_ms(),
    );

    if !suite.message.is_empty() {
        out.push_str(&format!(
            "<pre class=\"failure\">{}</pre>\n",
            escape_html(&suite.message)
        ));
    }

    for assertion in &suite.assertion_results {
        out.push_str(&format!(
            r#"<div class="assertion"><span class="badge {class}">{status}</span>{title}<span class="full-name">{full_name}</span>"#,
            class = status_class(&assertion.status),
            status = escape_html(&assertion.status),
            title = escape_html(&assertion.title),
            full_name = escape_html(&assertion.full_name),
        ));

        for message in &assertion.failure_messages {
            out.push_str(&format!(
                "\n<pre class=\"failure\">{}</pre>",
                escape_html(message)
            ));
        }

        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
    out
}

/// CSS class for a status tag; framework-defined tags get a neutral badge.
fn status_class(status: &str) -> &'static str {
    match status {
        STATUS_PASSED => "passed",
        STATUS_FAILED => "failed",
        STATUS_PENDING => "pending",
        _ => "other",
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
