//! Domain layer - Catalog, articles and time

pub mod article;
pub mod catalog;
pub mod clock;

pub use article::Article;
pub use catalog::{TagCatalog, TagFrequency};
pub use clock::{Clock, FixedClock, SystemClock};
