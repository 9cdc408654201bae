use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::Serializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use todoboard_core::{BoardResult, StateStore};

/// Key the board snapshot is stored under.
pub const STATE_KEY: &str = "kanbanState";

/// File-backed key-value snapshot store
///
/// Each key maps to `<dir>/<key>.json`. The whole document is rewritten on
/// every save; the last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    key: String,
    serializer: JsonSerializer,
}

impl JsonFileStore {
    /// Store for the board snapshot inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, STATE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            key: key.into(),
            serializer: JsonSerializer::pretty(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path to the snapshot file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}

impl<T: Serialize + DeserializeOwned> StateStore<T> for JsonFileStore {
    fn load(&self) -> BoardResult<Option<T>> {
        let path = self.path();
        if !path.exists() {
            tracing::debug!("No snapshot at {}", path.display());
            return Ok(None);
        }

        let bytes = AtomicWriter::read_all(&path)?;
        let state = self.serializer.deserialize(&bytes)?;

        tracing::info!("Loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Some(state))
    }

    fn save(&self, state: &T) -> BoardResult<()> {
        let path = self.path();
        let bytes = self.serializer.serialize(state)?;

        AtomicWriter::write_atomic(&path, &bytes)?;

        tracing::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
