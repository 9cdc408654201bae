use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error at {path}: {message}")]
    Storage { path: String, message: String },
}
