//! Durable append/delete log of simulated impact events.
//!
//! [`ImpactStore`] uses enum dispatch instead of an async trait object,
//! avoiding the dyn-compatibility issues with async methods. Two backends
//! exist: a JSON file store for production and an in-memory store for
//! tests and embedding.
//!
//! The file store's read-modify-write cycle is serialized by an internal
//! async mutex and persisted via write-to-temp plus atomic rename, so
//! concurrent writers within one process cannot lose updates.
//! Multi-process writers are out of scope.

use std::path::{Path, PathBuf};

use impactor_types::{ImpactEvent, ImpactId};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::StoreError;

/// A store of simulated impact events, keyed by identifier.
pub enum ImpactStore {
    /// JSON file-backed store.
    File(FileStore),
    /// In-memory store for tests and embedding.
    Memory(MemoryStore),
}

impl ImpactStore {
    /// Load every stored event, in store order.
    ///
    /// A missing or unparseable backing store yields an empty list rather
    /// than an error (data-loss-tolerant read policy).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] only for filesystem failures other than
    /// the file being absent.
    pub async fn load_all(&self) -> Result<Vec<ImpactEvent>, StoreError> {
        match self {
            Self::File(store) => store.load_all().await,
            Self::Memory(store) => Ok(store.load_all().await),
        }
    }

    /// Append one event to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialization`] if
    /// persisting fails.
    pub async fn append(&self, event: ImpactEvent) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.append(event).await,
            Self::Memory(store) => {
                store.append(event).await;
                Ok(())
            }
        }
    }

    /// Delete at most one event by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no event matches; the store is
    /// left unchanged in that case.
    pub async fn delete_by_id(&self, id: &ImpactId) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.delete_by_id(id).await,
            Self::Memory(store) => store.delete_by_id(id).await,
        }
    }

    /// Human-readable backend name for logging.
    pub const fn backend(&self) -> &str {
        match self {
            Self::File(_) => "file",
            Self::Memory(_) => "memory",
        }
    }
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// JSON file-backed impact store.
///
/// The backing file holds a single JSON array of [`ImpactEvent`] records.
pub struct FileStore {
    path: PathBuf,
    /// Serializes the read-modify-write cycle across concurrent callers.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a file store backed by the given path.
    ///
    /// The file does not need to exist yet; it is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored event.
    pub async fn load_all(&self) -> Result<Vec<ImpactEvent>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(events) => Ok(events),
            Err(e) => {
                // Corrupt content is downgraded to an empty list; the next
                // successful append rewrites the file wholesale.
                warn!(path = %self.path.display(), error = %e, "impact file unparseable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append one event (full read-modify-write under the writer lock).
    pub async fn append(&self, event: ImpactEvent) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut events = self.load_all().await?;
        events.push(event);
        self.persist(&events).await
    }

    /// Delete at most one event by identifier.
    pub async fn delete_by_id(&self, id: &ImpactId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut events = self.load_all().await?;

        let Some(position) = events.iter().position(|e| &e.id == id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        events.remove(position);

        self.persist(&events).await
    }

    /// Write the full event list via a temp file and atomic rename.
    async fn persist(&self, events: &[ImpactEvent]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(events)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory impact store used by tests and embedded callers.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<ImpactEvent>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with events.
    pub fn with_events(events: Vec<ImpactEvent>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }

    /// Load every stored event.
    pub async fn load_all(&self) -> Vec<ImpactEvent> {
        self.events.lock().await.clone()
    }

    /// Append one event.
    pub async fn append(&self, event: ImpactEvent) {
        self.events.lock().await.push(event);
    }

    /// Delete at most one event by identifier.
    pub async fn delete_by_id(&self, id: &ImpactId) -> Result<(), StoreError> {
        let mut events = self.events.lock().await;
        let Some(position) = events.iter().position(|e| &e.id == id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        events.remove(position);
        Ok(())
    }
}
