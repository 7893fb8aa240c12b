//! Teaser prose for episode releases.
//!
//! The prose leaves the teaser phrases themselves as empty quotes for the
//! editor to fill in, and relies on `Module:Chapter` substitutions for the
//! spinoff's chapter number and title.

use crate::citation::CitationFormatter;
use crate::config::CitationConfig;
use crate::normalize::SourceTextNormalizer;
use crate::types::{ContentCategory, TeaserResult};

const SPINOFF_ANNOUNCEMENT: &str = "{{Brackets|🎧 #OneYaba latest episode updated 🎧}} \
#BokuYabaSpinoff \"Rabukomedi ga Hajimaranai\" \
Score.0{{subst:#invoke:Chapter|detectChapterNumber}} \
\"{{subst:#invoke:Chapter|detectChapterTitle}}\" is now available!";

const MAIN_SERIES_ANNOUNCEMENT: &str = "The latest episode of the adolescent romantic comedy \
\"The Dangers in My Heart\" has been updated.";

const SPINOFF_RELEASE: &str = "It was released with the teaser text \"\".";

const MAIN_SERIES_RELEASE: &str = "It was released with the teaser texts \"\" and \"\".";

/// Generates teaser prose with an embedded citation footnote.
#[derive(Debug, Clone)]
pub struct TeaserTextGenerator {
    normalizer: SourceTextNormalizer,
    formatter: CitationFormatter,
    spinoff_marker: String,
}

impl Default for TeaserTextGenerator {
    fn default() -> Self {
        Self::from_config(&CitationConfig::default())
    }
}

impl TeaserTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CitationConfig) -> Self {
        Self {
            normalizer: SourceTextNormalizer::from_config(config),
            formatter: CitationFormatter::from_config(config),
            spinoff_marker: config.spinoff_marker.clone(),
        }
    }

    /// Series a raw title belongs to.
    pub fn classify(&self, raw_title: &str) -> ContentCategory {
        ContentCategory::classify(raw_title, &self.spinoff_marker)
    }

    /// Generate teaser prose for a post.
    ///
    /// `raw_title` is the extracted title before normalization; the marker
    /// check runs on it directly.
    pub fn generate(&self, user: &str, number: &str, raw_title: &str) -> TeaserResult {
        let category = self.classify(raw_title);
        let title = self.normalizer.normalize(raw_title);
        let embedded_citation = self.formatter.format(user, number, &title, "");

        let (announcement, release) = match category {
            ContentCategory::Spinoff => (SPINOFF_ANNOUNCEMENT, SPINOFF_RELEASE),
            ContentCategory::MainSeries => (MAIN_SERIES_ANNOUNCEMENT, MAIN_SERIES_RELEASE),
        };
        let prose = format!(
            "{} {}{}",
            announcement,
            release,
            embedded_citation.ref_tag()
        );

        TeaserResult {
            category,
            prose,
            embedded_citation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinoff_teaser() {
        let generator = TeaserTextGenerator::new();
        let teaser = generator.generate("haika_nanasaka", "42", "#おねヤバ 最新話更新");

        assert_eq!(teaser.category, ContentCategory::Spinoff);
        assert!(teaser.prose.starts_with("{{Brackets|🎧 #OneYaba latest episode updated 🎧}}"));
        assert!(teaser.prose.contains("\"Rabukomedi ga Hajimaranai\""));
        assert!(teaser.prose.contains("with the teaser text \"\".<ref>"));
        assert_eq!(teaser.prose.matches("<ref>").count(), 1);
        assert!(teaser.prose.ends_with(&teaser.embedded_citation.ref_tag()));
    }

    #[test]
    fn test_main_series_teaser() {
        let generator = TeaserTextGenerator::new();
        let teaser = generator.generate("boku__yaba", "42", "#僕ヤバ 最新話更新");

        assert_eq!(teaser.category, ContentCategory::MainSeries);
        assert_eq!(
            teaser.prose,
            format!(
                "The latest episode of the adolescent romantic comedy \"The Dangers in My Heart\" \
                 has been updated. It was released with the teaser texts \"\" and \"\".{}",
                teaser.embedded_citation.ref_tag()
            )
        );
        assert_eq!(teaser.prose.matches("<ref>").count(), 1);
    }

    #[test]
    fn test_embedded_citation_has_empty_translation() {
        let generator = TeaserTextGenerator::new();
        let teaser = generator.generate("boku__yaba", "42", "【更新】第5話");
        assert_eq!(
            teaser.embedded_citation.as_str(),
            "{{Cite tweet\n|user=boku__yaba |number=42 |title=第5話 |translation=\n}}"
        );
    }

    #[test]
    fn test_marker_checked_before_normalization() {
        // The marker sits in the footer that normalization drops
        let generator = TeaserTextGenerator::new();
        let teaser = generator.generate("u", "1", "第5話\n続き→おねヤバ");
        assert_eq!(teaser.category, ContentCategory::Spinoff);
        assert!(!teaser.embedded_citation.as_str().contains("おねヤバ"));
    }
}
