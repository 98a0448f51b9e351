// ============================================================================
// Upload page — static form, no report dependency
// ============================================================================

/// Render the upload landing page: a multipart file form and a paste-JSON
/// textarea, both posting via htmx so the server can answer with an
/// `HX-Redirect` to the summary view.
pub fn upload_page() -> String {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>jest-dash — Upload Test Summary</title>
<script src="https://unpkg.com/htmx.org@1.9.12"></script>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }
.header { background: #1976D2; color: white; padding: 20px 30px; }
.header h1 { margin: 0 0 8px 0; font-size: 24px; }
.header p { margin: 0; font-size: 16px; opacity: 0.9; }
.content { max-width: 700px; margin: 20px auto; padding: 0 20px; }
.panel { background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; }
.panel h3 { margin: 0 0 12px 0; font-size: 16px; }
textarea { width: 100%; min-height: 160px; font-family: monospace; font-size: 13px; box-sizing: border-box; }
button { background: #1976D2; color: white; border: none; border-radius: 4px; padding: 8px 16px; font-size: 14px; cursor: pointer; margin-top: 8px; }
.error { color: #c62828; font-size: 13px; white-space: pre-wrap; }
</style>
</head>
<body>
<div class="header">
<h1>jest-dash</h1>
<p>Upload a Jest JSON test-run summary to browse it</p>
</div>
<div class="content">
<div class="panel">
<h3>Upload a summary file</h3>
<form hx-post="/upload-test-summary" hx-encoding="multipart/form-data" hx-target="#file-result">
<input type="file" name="file" accept=".json,application/json" required>
<br>
<button type="submit">Upload</button>
</form>
<div id="file-result" class="error"></div>
</div>
<div class="panel">
<h3>Or paste the JSON</h3>
<form hx-post="/upload-json-text" hx-target="#text-result">
<textarea name="jsonText" placeholder='{"numTotalTestSuites": 1, ...}'></textarea>
<br>
<button type="submit">Process</button>
</form>
<div id="text-result" class="error"></div>
</div>
</div>
</body>
</html>"##
        .to_string()
}
