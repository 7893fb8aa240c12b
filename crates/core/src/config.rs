//! Fixed tables and literals the pipeline works from.
//!
//! A [`CitationConfig`] is built once (usually from [`Default`]) and handed
//! to each component; nothing reads ambient globals.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Month abbreviations as shown in post timestamps.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Ways machine translation has mangled the series title.
const TITLE_MISTRANSLATIONS: &[&str] = &[
    "My Dangerous Girlfriend",
    "My Dangerous Girl",
    "My Dangerous Heart",
    "My Dangerous Man",
    "My Dangerous Wife",
    "My Heart is Crazy",
    "My Heart Yabai",
    "My Heart's Bad Guy",
    "The Bad Guy in My Heart",
    "The Dangerous One in My Heart",
    "The Dangerous Thing in My Heart",
];

/// Accounts whose posts are worth citing.
const RECOGNIZED_AUTHORS: &[&str] = &[
    "lovely_pig328",
    "boku__yaba",
    "pig_man1209",
    "bokuyaba_anime",
    "haika_nanasaka",
];

/// Configuration for the citation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationConfig {
    /// Month abbreviation to full English name.
    pub months: BTreeMap<String, String>,

    /// Known mistranslations of the series title.
    pub title_mistranslations: Vec<String>,

    /// The official English title.
    pub canonical_title: String,

    /// Hashtag as written in the Japanese post.
    pub source_hashtag: String,

    /// Hashtag to use in English text.
    pub target_hashtag: String,

    /// Prefix that machine translation puts on update announcements.
    pub update_prefix: String,

    /// Update notice in the Japanese post.
    pub update_marker: String,

    /// Substring identifying posts about the spinoff.
    pub spinoff_marker: String,

    /// Titles this long or longer get a multi-line citation.
    pub layout_threshold: usize,

    /// Handles the helper activates for.
    pub recognized_authors: BTreeSet<String>,

    /// Reject empty user handles and non-numeric post numbers.
    pub strict_validation: bool,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            months: MONTHS
                .iter()
                .map(|(short, long)| (short.to_string(), long.to_string()))
                .collect(),
            title_mistranslations: TITLE_MISTRANSLATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            canonical_title: "The Dangers in My Heart".to_string(),
            source_hashtag: "#僕ヤバ".to_string(),
            target_hashtag: "#BokuYaba".to_string(),
            update_prefix: "[Update] ".to_string(),
            update_marker: "【更新】".to_string(),
            spinoff_marker: "おねヤバ".to_string(),
            layout_threshold: 15,
            recognized_authors: RECOGNIZED_AUTHORS.iter().map(|s| s.to_string()).collect(),
            strict_validation: false,
        }
    }
}

impl CitationConfig {
    /// Parse a configuration from JSON.
    ///
    /// Fields missing from the JSON keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.months.len() != 12 {
            return Err(Error::InvalidConfig(format!(
                "month table must have 12 entries, found {}",
                self.months.len()
            )));
        }
        if self.update_marker.is_empty() {
            return Err(Error::InvalidConfig("update marker must not be empty".into()));
        }
        Ok(())
    }

    /// Whether the helper should activate for this author.
    pub fn is_recognized_author(&self, handle: &str) -> bool {
        self.recognized_authors.contains(handle)
    }

    /// Full month name for an abbreviation.
    pub fn month_name(&self, abbreviation: &str) -> Option<&str> {
        self.months.get(abbreviation).map(String::as_str)
    }
}
