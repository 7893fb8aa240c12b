//! Text normalization for post titles and their translations.
//!
//! The Japanese title is cleaned of announcement boilerplate and flattened
//! onto one line; the English translation gets known machine-translation
//! mistakes corrected.

use crate::config::CitationConfig;
use crate::error::{Error, Result};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Ideographic (full-width) space, used in place of line breaks.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Regex matching the "continued" footer through end of text.
static CONTINUED_FOOTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\n続き→?.*$").unwrap());

/// Regex to collapse runs of ideographic spaces into one.
static IDEOGRAPHIC_SPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{3000}{2,}").unwrap());

/// Regex matching a link at the end of the title.
static TRAILING_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://.*$").unwrap());

/// A post title after source-language cleanup, before escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle(String);

impl NormalizedTitle {
    /// The cleaned title text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length used for the layout decision, in UTF-16 code units.
    ///
    /// This matches how the wiki editor's browser counts characters, so an
    /// emoji counts as two.
    pub fn layout_len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Cleans up the raw Japanese text of a post for use as a citation title.
#[derive(Debug, Clone)]
pub struct SourceTextNormalizer {
    /// Update notice to remove.
    update_marker: String,
}

impl Default for SourceTextNormalizer {
    fn default() -> Self {
        Self::from_config(&CitationConfig::default())
    }
}

impl SourceTextNormalizer {
    /// Create a normalizer with the default update marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer from configuration.
    pub fn from_config(config: &CitationConfig) -> Self {
        Self {
            update_marker: config.update_marker.clone(),
        }
    }

    /// Normalize a raw title.
    ///
    /// - Removes the update marker
    /// - Drops the "continued" footer and everything after it
    /// - Joins lines with single ideographic spaces
    /// - Drops a trailing link and a trailing ideographic space
    pub fn normalize(&self, title: &str) -> NormalizedTitle {
        let mut result = title.to_string();

        // Removing one marker can join the halves of another
        if !self.update_marker.is_empty() {
            while result.contains(&self.update_marker) {
                result = result.replace(&self.update_marker, "");
            }
        }

        result = CONTINUED_FOOTER_REGEX.replace(&result, "").into_owned();
        result = result.replace('\n', "\u{3000}");
        result = IDEOGRAPHIC_SPACE_RUN_REGEX
            .replace_all(&result, "\u{3000}")
            .into_owned();

        // Links are only separated from the text by converted line breaks,
        // so this has to come after joining lines.
        result = TRAILING_URL_REGEX.replace(&result, "").into_owned();

        if result.ends_with(IDEOGRAPHIC_SPACE) {
            result.pop();
        }

        log::debug!("Normalized title {:?} -> {:?}", title, result);
        NormalizedTitle(result)
    }
}

/// Corrects machine translations of post text.
#[derive(Debug, Clone)]
pub struct TranslationNormalizer {
    /// Alternation of all mistranslations, longest first.
    mistranslations: Option<Regex>,
    canonical_title: String,
    source_hashtag: String,
    target_hashtag: String,
    update_prefix: String,
}

impl TranslationNormalizer {
    /// Create a normalizer from configuration.
    pub fn from_config(config: &CitationConfig) -> Result<Self> {
        let mut variants: Vec<&str> = config
            .title_mistranslations
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();

        // Leftmost-first alternation: put longer variants first so that a
        // variant which is a prefix of another cannot win.
        variants.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        variants.dedup();

        let mistranslations = if variants.is_empty() {
            None
        } else {
            let pattern = variants
                .iter()
                .map(|v| regex::escape(v))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&pattern)
                .map_err(|e| Error::InvalidConfig(format!("mistranslation list: {}", e)))?;
            Some(regex)
        };

        Ok(Self {
            mistranslations,
            canonical_title: config.canonical_title.clone(),
            source_hashtag: config.source_hashtag.clone(),
            target_hashtag: config.target_hashtag.clone(),
            update_prefix: config.update_prefix.clone(),
        })
    }

    /// Normalize a translated string.
    pub fn normalize(&self, translation: &str) -> String {
        let mut result = match &self.mistranslations {
            Some(regex) => regex
                .replace_all(translation, NoExpand(self.canonical_title.as_str()))
                .into_owned(),
            None => translation.to_string(),
        };

        // Hashtags are left untranslated
        if !self.source_hashtag.is_empty() {
            result = result.replace(&self.source_hashtag, &self.target_hashtag);
        }

        if !self.update_prefix.is_empty() {
            if let Some(rest) = result.strip_prefix(&self.update_prefix) {
                result = rest.to_string();
            }
        }

        result
    }
}
