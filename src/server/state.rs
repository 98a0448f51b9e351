use std::sync::Arc;

use crate::store::report_store::ReportStore;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current-report store, shared across requests.
    pub store: Arc<ReportStore>,
}

impl AppState {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }
}
