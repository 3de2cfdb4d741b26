use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Integer key used to select an article on the detail page.
pub type ArticleId = i64;

/// One catalog record. Field names on the wire are the original record keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    #[serde(rename = "pavadinimas")]
    pub title: String,
    #[serde(rename = "autoriai")]
    pub authors: String,
    #[serde(rename = "metai", deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(rename = "institucija", default)]
    pub institution: String,
    #[serde(rename = "saltinis", default)]
    pub source: String,
    #[serde(rename = "santrauka", default)]
    pub paper_abstract: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<String>,
    #[serde(rename = "pilnas_vertimas", default, skip_serializing_if = "Option::is_none")]
    pub full_translation: Option<String>,
    #[serde(rename = "raktiniai_zodziai", default)]
    pub keywords: Vec<String>,
    /// Section key to section body, in document order.
    #[serde(rename = "turinys", default)]
    pub body: IndexMap<String, String>,
}

impl Article {
    pub fn doi(&self) -> Option<&str> {
        present(&self.doi)
    }

    pub fn pdf_file(&self) -> Option<&str> {
        present(&self.pdf_file)
    }

    pub fn full_translation(&self) -> Option<&str> {
        present(&self.full_translation)
    }
}

/// Years arrive as JSON numbers, so `2004.0` is as good as `2004`.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let year = f64::deserialize(deserializer)?;
    if year.fract() == 0.0 && year >= f64::from(i32::MIN) && year <= f64::from(i32::MAX) {
        Ok(year as i32)
    } else {
        Err(D::Error::custom(format!("metai {year} is not a whole year")))
    }
}

// An empty link is as good as no link.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
