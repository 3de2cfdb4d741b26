use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::section_titles::SectionTitles;

const DEFAULT_LISTING_FILE: &str = "index.html";

/// Page names and container ids the two flows render against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the detail page sends visitors without a usable id.
    pub listing_page: String,
    /// Target of the "read more" link on each listing card.
    pub detail_page: String,
    pub listing_container: String,
    pub detail_container: String,
    /// Optional JSON table of section headings; the built-in table otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_titles: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listing_page: DEFAULT_LISTING_FILE.to_string(),
            detail_page: "straipsnis.html".to_string(),
            listing_container: "straipsniai-container".to_string(),
            detail_container: "straipsnis-container".to_string(),
            section_titles: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_json_str(&file_contents)?;
        // A relative title table is relative to the config file.
        if let (Some(titles), Some(dir)) = (config.section_titles.as_mut(), path.parent()) {
            if titles.is_relative() {
                *titles = dir.join(&*titles);
            }
        }
        Ok(config)
    }

    pub fn section_titles(&self) -> Result<SectionTitles> {
        match &self.section_titles {
            Some(path) => SectionTitles::load(path),
            None => Ok(SectionTitles::default()),
        }
    }

    /// Link to the detail page of article `id`.
    pub fn detail_href(&self, id: crate::ArticleId) -> String {
        format!("{}?id={}", self.detail_page, id)
    }

    /// File the listing page is written to in a static build: the last path
    /// segment of `listing_page`, or `index.html` when the address names a
    /// directory (`/`, `docs/`) rather than a file.
    pub fn listing_file(&self) -> &str {
        let address = self
            .listing_page
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or("");
        match address.rsplit('/').next() {
            Some(name) if !name.is_empty() && name != "." && name != ".." => name,
            _ => DEFAULT_LISTING_FILE,
        }
    }

    /// File stem of per-article snapshots, `straipsnis` for `straipsnis.html`.
    pub fn detail_stem(&self) -> &str {
        Path::new(&self.detail_page)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("article")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_json_str(r#"{"listing_page": "/"}"#).unwrap();
        assert_eq!(config.listing_page, "/");
        assert_eq!(config.detail_page, "straipsnis.html");
        assert_eq!(config.detail_container, "straipsnis-container");
    }

    #[test]
    fn detail_links_carry_the_id() {
        let config = SiteConfig::default();
        assert_eq!(config.detail_href(4), "straipsnis.html?id=4");
        assert_eq!(config.detail_stem(), "straipsnis");
    }

    #[test]
    fn listing_file_is_the_last_address_segment() {
        let file_for = |listing_page: &str| {
            let config = SiteConfig {
                listing_page: listing_page.to_string(),
                ..SiteConfig::default()
            };
            config.listing_file().to_string()
        };
        assert_eq!(file_for("index.html"), "index.html");
        assert_eq!(file_for("/srv/www/sarasas.html"), "sarasas.html");
        assert_eq!(file_for("https://example.org/lt/sarasas.html?x=1#top"), "sarasas.html");
        assert_eq!(file_for("/"), "index.html");
        assert_eq!(file_for("docs/"), "index.html");
        assert_eq!(file_for(".."), "index.html");
        assert_eq!(file_for(""), "index.html");
    }

    #[test]
    fn title_table_path_is_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("site.json");
        std::fs::write(&config_path, r#"{"section_titles": "titles.json"}"#).unwrap();
        std::fs::write(dir.path().join("titles.json"), r#"{"k": "Heading"}"#).unwrap();

        let config = SiteConfig::load(&config_path).unwrap();
        assert_eq!(config.section_titles, Some(dir.path().join("titles.json")));
        assert_eq!(config.section_titles().unwrap().resolve("k"), "Heading");
    }
}
