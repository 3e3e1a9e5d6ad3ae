//! Infrastructure layer - Settings and file system output

pub mod config;
pub mod repository;

pub use config::SeedConfig;
pub use repository::{ContentRepository, FileSystemRepository};
