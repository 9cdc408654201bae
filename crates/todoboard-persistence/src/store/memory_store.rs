use crate::serialization::JsonSerializer;
use crate::traits::Serializer;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use todoboard_core::{BoardResult, StateStore};

#[derive(Debug, Default)]
struct Slot {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

/// Snapshot store that keeps the serialized document in memory.
///
/// Stores the same bytes a file store would write, so a snapshot that does
/// not survive serialization fails here too.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Slot>,
    serializer: JsonSerializer,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with raw stored bytes, valid or not.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Mutex::new(Slot {
                bytes: Some(bytes.into()),
                saves: 0,
            }),
            serializer: JsonSerializer::compact(),
        }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.slot.lock().saves
    }
}

impl<T: Serialize + DeserializeOwned> StateStore<T> for MemoryStore {
    fn load(&self) -> BoardResult<Option<T>> {
        let slot = self.slot.lock();
        match &slot.bytes {
            Some(bytes) => self.serializer.deserialize(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, state: &T) -> BoardResult<()> {
        let bytes = self.serializer.serialize(state)?;
        let mut slot = self.slot.lock();
        slot.bytes = Some(bytes);
        slot.saves += 1;
        Ok(())
    }
}
