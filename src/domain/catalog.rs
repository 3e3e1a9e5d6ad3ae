//! Tag catalog: the tag name to frequency mapping driving generation

use crate::error::{Result, SeedError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Highest accepted frequency; the generator creates `frequency + 1` articles
pub const MAX_FREQUENCY: u32 = 10_000;

// Built-in catalog dataset
const EMBEDDED_CATALOG: &str = r#"
{
    "quia": 15,
    "molestiae": 7,
    "voluptates": 4,
    "dignissimos": 5,
    "occaecati": 3,
    "doloribus": 3,
    "ad": 2,
    "laudantium": 1,
    "aut": 1,
    "nulla": 4,
    "nobis": 9,
    "sunt": 6
}
"#;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFrequency {
    pub name: String,
    pub frequency: u32,
}

impl TagFrequency {
    pub fn new(name: impl Into<String>, frequency: u32) -> Self {
        TagFrequency {
            name: name.into(),
            frequency,
        }
    }
}

/// Ordered mapping from tag name to frequency.
///
/// Entries keep the order in which they appear in the source, so the tag order
/// on every generated article is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TagCatalog {
    entries: Vec<TagFrequency>,
}

impl TagCatalog {
    /// Parse a catalog from a flat JSON object of `"tag": count` pairs
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SeedError::Catalog(e.to_string()))
    }

    /// Read and parse a JSON catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            SeedError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// The built-in catalog
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Highest frequency in the catalog, 0 when empty
    pub fn max_frequency(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.frequency)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagFrequency> {
        self.entries.iter()
    }
}

impl TryFrom<Map<String, Value>> for TagCatalog {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let frequency = value
                .as_u64()
                .and_then(checked_frequency)
                .ok_or_else(|| frequency_error(&name, &value))?;
            entries.push(TagFrequency { name, frequency });
        }
        Ok(TagCatalog { entries })
    }
}

impl TagCatalog {
    /// Build a catalog from `(name, frequency)` pairs, keeping their order
    pub fn from_pairs<S, I>(pairs: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, u64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, n)| {
                let name = name.into();
                match checked_frequency(n) {
                    Some(frequency) => Ok(TagFrequency { name, frequency }),
                    None => Err(SeedError::Catalog(frequency_error(&name, &n))),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TagCatalog { entries })
    }
}

fn checked_frequency(n: u64) -> Option<u32> {
    u32::try_from(n).ok().filter(|n| *n <= MAX_FREQUENCY)
}

fn frequency_error(name: &str, value: &dyn std::fmt::Display) -> String {
    format!(
        "tag '{}' has invalid frequency {}, expected an integer from 0 to {}",
        name, value, MAX_FREQUENCY
    )
}
