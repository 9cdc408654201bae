use crate::traits::Serializer;
use todoboard_core::{BoardError, BoardResult};

/// JSON serializer for board snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact output, one line per document
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output, for files a person may open
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> BoardResult<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(data)
        } else {
            serde_json::to_vec(data)
        };
        result.map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> BoardResult<T> {
        serde_json::from_slice(bytes).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}
