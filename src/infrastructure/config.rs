//! Generation settings

use std::path::PathBuf;

const DEFAULT_PAGE_NAME: &str = "learning";
const DEFAULT_DATE_BEGIN: u32 = 10;
const DEFAULT_CONTENT_ROOT: &str = "content";

const PLACEHOLDER_BODY: &str = "
Nostrum molestiae repellendus quidem distinctio debitis et fugiat
Et deserunt voluptatum omnis voluptas optio mollitia officia et
Enim ducimus autem laudantium
Aut porro qui veniam ut aperiam
Est quo nulla nobis sunt impedit earum est.  

### Subtitle  

Qui modi et veniam voluptas maiores quas.  
Omnis ipsa molestiae ad.  
Omnis placeat fuga ut.  
Saepe eos id quae et quod dolore officiis.  
Similique voluptatem iure sit aut rerum et debitis.  
Odio omnis aperiam dolor expedita et in aspernatur sequi.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Prefix of every article file name and name of the output subdirectory
    pub page_name: String,
    /// Age in days of the newest article
    pub date_begin: u32,
    /// Directory that holds the page directory
    pub content_root: PathBuf,
    /// Body shared by every article
    pub body: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            page_name: DEFAULT_PAGE_NAME.to_string(),
            date_begin: DEFAULT_DATE_BEGIN,
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            body: PLACEHOLDER_BODY.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
        self.page_name = page_name.into();
        self
    }

    pub fn with_date_begin(mut self, date_begin: u32) -> Self {
        self.date_begin = date_begin;
        self
    }

    pub fn with_content_root(mut self, content_root: impl Into<PathBuf>) -> Self {
        self.content_root = content_root.into();
        self
    }

    /// `<content_root>/<page_name>`, wiped and rewritten on every run
    pub fn output_dir(&self) -> PathBuf {
        self.content_root.join(&self.page_name)
    }

    /// File name of the article at `index`
    pub fn article_name(&self, index: u32) -> String {
        format!("{}-{}.md", self.page_name, index)
    }
}
