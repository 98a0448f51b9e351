use jest_dash::ingest::decode::decode_summary;
use jest_dash::render::dashboard::render_dashboard;
use jest_dash::render::pages::upload_page;

// ============================================================================
// Fixtures
// ============================================================================

fn summary_json(status: &str, failed_suites: usize, suite_name: &str) -> String {
    format!(
        r#"{{
  "numFailedTestSuites": {failed},
  "numFailedTests": {failed},
  "numPassedTestSuites": 1,
  "numPassedTests": 4,
  "numPendingTestSuites": 0,
  "numPendingTests": 0,
  "numRuntimeErrorTestSuites": 0,
  "numTodoTests": 2,
  "numTotalTestSuites": 1,
  "testResults": [
    {{
      "startTime": 1000,
      "endTime": 3500,
      "name": "{name}",
      "status": "{status}",
      "message": "",
      "assertionResults": [
        {{
          "fullName": "widget renders & updates",
          "title": "renders <b>bold</b>",
          "status": "{status}",
          "failureMessages": ["expected <div> to contain \"ok\""]
        }}
      ]
    }}
  ]
}}"#,
        failed = failed_suites,
        name = suite_name,
        status = status,
    )
}

// ============================================================================
// 1. Upload page
// ============================================================================

#[test]
fn upload_page_contains_both_forms() {
    let page = upload_page();
    assert!(page.contains("hx-post=\"/upload-test-summary\""));
    assert!(page.contains("hx-post=\"/upload-json-text\""));
    assert!(page.contains("name=\"file\""));
    assert!(page.contains("name=\"jsonText\""));
}

// ============================================================================
// 2. Dashboard content
// ============================================================================

#[test]
fn dashboard_shows_counters_and_suite() {
    let summary = decode_summary(&summary_json("passed", 0, "src/widget.test.js")).unwrap();
    let page = render_dashboard(&summary);

    assert!(page.contains("src/widget.test.js"));
    assert!(page.contains("ALL TEST SUITES PASSED"));
    assert!(page.contains("Todo tests"));
    assert!(page.contains("2500 ms"));
}

#[test]
fn dashboard_header_goes_red_on_failures() {
    let summary = decode_summary(&summary_json("failed", 1, "src/widget.test.js")).unwrap();
    let page = render_dashboard(&summary);

    assert!(page.contains("SOME TEST SUITES FAILED"));
    assert!(page.contains("#f44336"));
}

#[test]
fn dashboard_shows_failure_messages() {
    let summary = decode_summary(&summary_json("failed", 1, "src/widget.test.js")).unwrap();
    let page = render_dashboard(&summary);

    assert!(page.contains("expected &lt;div&gt; to contain"));
}

#[test]
fn dashboard_links_each_filter() {
    let summary = decode_summary(&summary_json("passed", 0, "a.test.js")).unwrap();
    let page = render_dashboard(&summary);

    for flag in [
        "onlyFailedTests",
        "onlyPassedTests",
        "onlyPendingTests",
        "onlyFailedAssertions",
    ] {
        assert!(
            page.contains(&format!("/summary?{}=true", flag)),
            "missing filter link for {}",
            flag
        );
    }
}

// ============================================================================
// 3. Escaping
// ============================================================================

#[test]
fn user_supplied_strings_are_escaped() {
    let summary =
        decode_summary(&summary_json("passed", 0, "<script>alert(1)</script>")).unwrap();
    let page = render_dashboard(&summary);

    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    // Assertion titles and full names pass through the same escaping.
    assert!(page.contains("renders &lt;b&gt;bold&lt;/b&gt;"));
    assert!(page.contains("widget renders &amp; updates"));
}
