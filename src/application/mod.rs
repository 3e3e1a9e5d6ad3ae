//! Application layer - Use cases and orchestration

pub mod generate_articles;
pub mod seed;
pub mod write_articles;

pub use generate_articles::GenerateArticlesService;
pub use seed::seed;
pub use write_articles::WriteArticlesService;
