//! Display headings for article body sections.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};

const DEFAULT_TITLES: [(&str, &str); 7] = [
    ("ivadinė_dalis", "Įvadinė dalis"),
    (
        "trauminio_streso_tyrimu_kilimas",
        "Trauminio streso tyrimų kilimas Baltijos valstybėse",
    ),
    ("politinio_smurto_tyrimai", "Politinio smurto tyrimai"),
    ("traumos_ir_ptss_paplitimas", "Traumos ir PTSS paplitimas"),
    ("nelaimes_tyrimai", "Nelaimių tyrimai"),
    ("raidos_perspektyva", "Raidos perspektyva"),
    (
        "ateities_kryptys",
        "Ateities kryptys trauma tyrimams ir praktikai Baltijos valstybėse",
    ),
];

/// Key to heading table for one article schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTitles {
    titles: IndexMap<String, String>,
}

impl Default for SectionTitles {
    /// The trauma research corpus table.
    fn default() -> Self {
        DEFAULT_TITLES.into_iter().collect()
    }
}

impl SectionTitles {
    pub fn empty() -> Self {
        Self {
            titles: IndexMap::new(),
        }
    }

    /// Reads a JSON object of `"key": "Heading"` pairs.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let titles: IndexMap<String, String> = serde_json::from_str(contents)?;
        Ok(Self { titles })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&file_contents)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Heading for `key`, falling back to [`format_section_key`] for keys
    /// the table does not know (or maps to an empty heading).
    pub fn resolve(&self, key: &str) -> String {
        match self.titles.get(key) {
            Some(heading) if !heading.is_empty() => heading.clone(),
            _ => format_section_key(key),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SectionTitles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            titles: iter
                .into_iter()
                .map(|(key, heading)| (key.into(), heading.into()))
                .collect(),
        }
    }
}

/// Underscores become spaces and every whitespace separated word gets an
/// uppercase first letter. The rest of each word is left untouched.
pub fn format_section_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut formatted = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            formatted.push(c);
        } else if at_word_start {
            at_word_start = false;
            formatted.extend(c.to_uppercase());
        } else {
            formatted.push(c);
        }
    }
    formatted
}
