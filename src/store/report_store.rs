use std::sync::Mutex;

use crate::ingest::decode::decode_summary;
use crate::store::snapshot::SnapshotStore;
use crate::summary::summary_model::TestRunSummary;

// ============================================================================
// Report store — current report behind a lock, snapshot as fallback
// ============================================================================

/// Holds the most recently uploaded report for the lifetime of the process.
///
/// Each upload replaces the previous report wholesale; there is no merging.
/// The mutex guards only the in-memory slot and is never held across
/// snapshot I/O, so uploads and view requests can interleave freely
/// (last-writer-wins).
pub struct ReportStore {
    current: Mutex<Option<TestRunSummary>>,
    snapshot: Box<dyn SnapshotStore>,
}

impl ReportStore {
    pub fn new(snapshot: Box<dyn SnapshotStore>) -> Self {
        Self {
            current: Mutex::new(None),
            snapshot,
        }
    }

    /// Replace the current report unconditionally, then persist the raw
    /// document as the fallback snapshot. Snapshot failure is logged and
    /// swallowed — durability here is best-effort.
    pub fn set(&self, summary: TestRunSummary, raw: &str) {
        *self.current.lock().unwrap() = Some(summary);

        if let Err(e) = self.snapshot.save(raw) {
            tracing::warn!(error = %e, "failed to persist fallback snapshot");
        }
    }

    /// Return a copy of the current report.
    ///
    /// When no report has been uploaded this session, attempt to recover one
    /// from the fallback snapshot; a recovered report is cached so the
    /// snapshot is read at most once per gap. Returns `None` when there is
    /// neither an in-memory report nor a decodable snapshot.
    pub fn get(&self) -> Option<TestRunSummary> {
        if let Some(summary) = self.current.lock().unwrap().clone() {
            return Some(summary);
        }

        // Snapshot I/O happens outside the lock.
        let raw = match self.snapshot.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read fallback snapshot");
                return None;
            }
        };

        let summary = match decode_summary(&raw) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "fallback snapshot is not a valid summary");
                return None;
            }
        };

        let mut slot = self.current.lock().unwrap();
        // An upload may have landed while we were reading the snapshot; the
        // fresher report wins.
        if slot.is_none() {
            *slot = Some(summary);
        }
        slot.clone()
    }
}
