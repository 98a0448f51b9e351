use std::collections::HashMap;

use axum::extract::{Multipart, Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::ingest::decode::decode_summary;
use crate::render::dashboard::render_dashboard;
use crate::render::pages::upload_page;
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::summary::filter::{filter_summary, SummaryFilter};

// ============================================================================
// Upload page
// ============================================================================

pub async fn index() -> Html<String> {
    Html(upload_page())
}

// ============================================================================
// POST /upload-test-summary — multipart file upload
// ============================================================================

pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|_| ApiError::Upload("file is not valid UTF-8".to_string()))?;
        raw = Some(text);
    }

    let raw = raw.ok_or_else(|| ApiError::Upload("missing 'file' form field".to_string()))?;

    let summary = decode_summary(&raw)?;
    tracing::info!(
        suites = summary.num_total_test_suites,
        bytes = raw.len(),
        "test summary file uploaded"
    );
    state.store.set(summary, &raw);

    Ok(hx_redirect("/summary", "File uploaded successfully"))
}

// ============================================================================
// POST /upload-json-text — pasted JSON body
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct JsonTextForm {
    #[serde(rename = "jsonText", default)]
    pub json_text: String,
}

pub async fn upload_json_text(
    State(state): State<AppState>,
    Form(form): Form<JsonTextForm>,
) -> ApiResult<Response> {
    let summary = decode_summary(&form.json_text)?;
    tracing::info!(
        suites = summary.num_total_test_suites,
        "test summary pasted as text"
    );
    state.store.set(summary, form.json_text.trim());

    Ok(hx_redirect("/summary", "JSON processed successfully"))
}

// ============================================================================
// GET /summary — filtered dashboard view
// ============================================================================

pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(current) = state.store.get() else {
        return redirect_home(&headers);
    };

    // No query parameters: serve the stored report as-is. With parameters,
    // the filter recomputes every counter from the retained subset; an
    // all-false filter yields the same result as the bypass.
    let page = if query.is_empty() {
        render_dashboard(&current)
    } else {
        let filter = SummaryFilter::from_query(&query);
        render_dashboard(&filter_summary(&filter, &current))
    };

    Html(page).into_response()
}

// ============================================================================
// Response helpers
// ============================================================================

/// 200 with an `HX-Redirect` header: htmx performs the navigation
/// client-side, which a plain 3xx would not trigger from an AJAX form post.
fn hx_redirect(location: &str, body: &'static str) -> Response {
    ([("HX-Redirect", location.to_string())], body).into_response()
}

/// Send the caller back to the upload page: `HX-Redirect` for htmx
/// requests, a real 303 otherwise.
fn redirect_home(headers: &HeaderMap) -> Response {
    let is_htmx = headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false);

    if is_htmx {
        hx_redirect("/", "Redirecting to home page")
    } else {
        Redirect::to("/").into_response()
    }
}
