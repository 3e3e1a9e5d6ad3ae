use env_logger::Env;
use tagseed::application::seed;
use tagseed::domain::{SystemClock, TagCatalog};
use tagseed::error::SeedError;
use tagseed::infrastructure::SeedConfig;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<(), SeedError> {
    let config = SeedConfig::default();
    let catalog = TagCatalog::embedded()?;
    log::info!(
        "Loaded {} tags (highest frequency {})",
        catalog.len(),
        catalog.max_frequency()
    );

    seed(&config, &catalog, SystemClock)?;
    Ok(())
}
