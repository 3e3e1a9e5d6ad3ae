//! Error types for tagseed

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagseed
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid tag catalog: {0}")]
    Catalog(String),

    #[error("Cannot reset output directory {}: {source}", .path.display())]
    ResetDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write article {}: {source}", .path.display())]
    WriteArticle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SeedError::Catalog(_) => 2,
            SeedError::ResetDirectory { .. } => 3,
            SeedError::WriteArticle { .. } => 4,
        }
    }
}

/// Result type using SeedError
pub type Result<T> = std::result::Result<T, SeedError>;
