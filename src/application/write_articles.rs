//! Write articles use case

use crate::domain::Article;
use crate::error::Result;
use crate::infrastructure::ContentRepository;

/// Service for writing rendered articles into a freshly reset directory
pub struct WriteArticlesService<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> WriteArticlesService<R> {
    pub fn new(repository: R) -> Self {
        WriteArticlesService { repository }
    }

    /// Reset the output directory, then write every article in list order.
    ///
    /// The first failure aborts the batch; files already written stay in place.
    pub fn execute(&self, articles: &[Article]) -> Result<()> {
        self.repository.reset()?;
        log::info!("Reset {}", self.repository.root().display());

        for article in articles {
            self.repository
                .write_article(&article.name, &article.render())?;
            log::debug!("Wrote {}", article.name);
        }

        log::info!(
            "Wrote {} articles to {}",
            articles.len(),
            self.repository.root().display()
        );
        Ok(())
    }
}
