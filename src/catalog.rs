use std::fs;
use std::path::Path;

use crate::article::{Article, ArticleId};
use crate::error::{Error, Result};

/// The read-only article collection both page flows are handed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(contents)?;
        Ok(Self::new(articles))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_contents: String = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json_str(&file_contents)?;
        tracing::info!(
            path = %path.display(),
            articles = catalog.len(),
            "loaded article catalog"
        );
        Ok(catalog)
    }

    /// First article whose id equals `id`. Ids are not checked for
    /// uniqueness, so a duplicate never shadows the earlier record.
    pub fn find(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl From<Vec<Article>> for Catalog {
    fn from(articles: Vec<Article>) -> Self {
        Self::new(articles)
    }
}
