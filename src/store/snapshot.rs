use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

// ============================================================================
// Fallback snapshot — last raw upload, persisted best-effort
// ============================================================================

/// Persistence seam for the last successfully ingested raw document.
///
/// Implementations are best-effort: no atomicity, no locking against
/// concurrent writers. The store treats a failed save as a logged warning,
/// never a request failure.
pub trait SnapshotStore: Send + Sync {
    /// Overwrite the snapshot with the given raw JSON document.
    fn save(&self, raw: &str) -> io::Result<()>;

    /// Read the snapshot back, or `None` if no snapshot exists.
    fn load(&self) -> io::Result<Option<String>>;
}

/// Single-file snapshot in the working directory, overwritten on every save.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshot {
    fn save(&self, raw: &str) -> io::Result<()> {
        std::fs::write(&self.path, raw)
    }

    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory snapshot for tests and no-persistence deployments.
#[derive(Default)]
pub struct MemorySnapshot {
    inner: Mutex<Option<String>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn save(&self, raw: &str) -> io::Result<()> {
        *self.inner.lock().unwrap() = Some(raw.to_string());
        Ok(())
    }

    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.inner.lock().unwrap().clone())
    }
}
