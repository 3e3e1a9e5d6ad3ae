//! Seed content use case: load the catalog, generate, write

use crate::application::{GenerateArticlesService, WriteArticlesService};
use crate::domain::{Clock, TagCatalog};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SeedConfig};
use std::fmt::Display;

/// Run the full pipeline for `catalog` and return the number of articles written.
pub fn seed<C>(config: &SeedConfig, catalog: &TagCatalog, clock: C) -> Result<usize>
where
    C: Clock,
    <C::Tz as chrono::TimeZone>::Offset: Display,
{
    let articles = GenerateArticlesService::new(config, clock).execute(catalog);

    let repository = FileSystemRepository::new(config.output_dir());
    WriteArticlesService::new(repository).execute(&articles)?;

    Ok(articles.len())
}
