//! Generate articles use case

use crate::domain::clock::days_ago;
use crate::domain::{Article, Clock, TagCatalog};
use crate::infrastructure::SeedConfig;
use std::fmt::Display;

/// Builds the article list for a tag catalog.
///
/// With a highest frequency of `M` the result holds `M + 1` articles. A tag
/// with frequency `n` is attached to the first `n + 1` of them, so article 0
/// carries every tag and later articles carry progressively fewer.
pub struct GenerateArticlesService<'a, C: Clock> {
    config: &'a SeedConfig,
    clock: C,
}

impl<'a, C> GenerateArticlesService<'a, C>
where
    C: Clock,
    <C::Tz as chrono::TimeZone>::Offset: Display,
{
    pub fn new(config: &'a SeedConfig, clock: C) -> Self {
        GenerateArticlesService { config, clock }
    }

    pub fn execute(&self, catalog: &TagCatalog) -> Vec<Article> {
        let now = self.clock.now();
        let count = catalog.max_frequency() + 1;

        let mut articles: Vec<Article> = (0..count)
            .map(|i| {
                Article::new(
                    self.config.article_name(i),
                    days_ago(&now, u64::from(i) + u64::from(self.config.date_begin)),
                    self.config.body.clone(),
                )
            })
            .collect();

        for tag in catalog.iter() {
            let prefix = tag.frequency as usize + 1;
            for article in &mut articles[..prefix] {
                article.tags.push(tag.name.clone());
            }
        }

        log::info!(
            "Generated {} articles from {} tags",
            articles.len(),
            catalog.len()
        );
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use chrono::DateTime;

    fn clock() -> FixedClock {
        FixedClock(DateTime::parse_from_rfc3339("2025-01-17T09:30:00+02:00").unwrap())
    }

    fn generate(catalog: &TagCatalog) -> Vec<Article> {
        let config = SeedConfig::default();
        GenerateArticlesService::new(&config, clock()).execute(catalog)
    }

    #[test]
    fn test_two_tag_scenario() {
        let catalog = TagCatalog::from_pairs(vec![("a", 1), ("b", 0)]).unwrap();
        let articles = generate(&catalog);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].name, "learning-0.md");
        assert_eq!(articles[1].name, "learning-1.md");
        assert_eq!(articles[0].tags, vec!["a", "b"]);
        assert_eq!(articles[1].tags, vec!["a"]);
    }

    #[test]
    fn test_empty_catalog_yields_single_untagged_article() {
        let articles = generate(&TagCatalog::default());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].name, "learning-0.md");
        assert!(articles[0].tags.is_empty());
    }

    #[test]
    fn test_each_tag_covers_its_prefix() {
        let catalog = TagCatalog::embedded().unwrap();
        let articles = generate(&catalog);

        assert_eq!(articles.len(), catalog.max_frequency() as usize + 1);
        for tag in catalog.iter() {
            let carriers: Vec<usize> = articles
                .iter()
                .enumerate()
                .filter(|(_, a)| a.tags.contains(&tag.name))
                .map(|(i, _)| i)
                .collect();
            let expected: Vec<usize> = (0..=tag.frequency as usize).collect();
            assert_eq!(carriers, expected, "tag {}", tag.name);
        }
    }

    #[test]
    fn test_first_article_has_every_tag_in_catalog_order() {
        let catalog = TagCatalog::embedded().unwrap();
        let articles = generate(&catalog);
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(articles[0].tags, names);
    }

    #[test]
    fn test_dates_step_back_one_day_per_index() {
        let catalog = TagCatalog::from_pairs(vec![("a", 2)]).unwrap();
        let articles = generate(&catalog);
        let dates: Vec<&str> = articles.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-01-07T09:30:00+02:00",
                "2025-01-06T09:30:00+02:00",
                "2025-01-05T09:30:00+02:00",
            ]
        );
    }

    #[test]
    fn test_config_drives_names_and_dates() {
        let config = SeedConfig::default()
            .with_page_name("notes")
            .with_date_begin(0);
        let catalog = TagCatalog::from_pairs(vec![("a", 1)]).unwrap();
        let articles = GenerateArticlesService::new(&config, clock()).execute(&catalog);

        assert_eq!(articles[1].name, "notes-1.md");
        assert_eq!(articles[0].date, "2025-01-17T09:30:00+02:00");
        assert!(articles.iter().all(|a| a.content == config.body));
    }
}
