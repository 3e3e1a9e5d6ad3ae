//! tagseed - Synthetic article generator
//!
//! Generates a batch of markdown articles with front matter whose tag usage
//! follows a catalog of tag frequencies, for seeding a static-site content
//! directory.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SeedError;
