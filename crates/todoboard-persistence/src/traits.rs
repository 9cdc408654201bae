use todoboard_core::BoardResult;

/// Trait for serialization/deserialization strategies
/// Allows swapping JSON for another encoding without touching the stores
pub trait Serializer<T>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> BoardResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> BoardResult<T>;
}
