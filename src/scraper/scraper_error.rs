use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Failed to read offset file {}: {message}", path.display())]
    StorageRead { path: PathBuf, message: String },
    #[error("Failed to write offset file {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
