//! `{{Cite tweet}}` template output.
//!
//! Short titles get a compact single-line record; longer ones put the title
//! and translation on their own lines so the wiki source stays readable.

use crate::config::CitationConfig;
use crate::escape::escape_special_characters;
use crate::normalize::NormalizedTitle;
use crate::types::{CitationLayout, CitationMarkup};

/// Formatter for `{{Cite tweet}}` records.
#[derive(Debug, Clone)]
pub struct CitationFormatter {
    /// Titles this long or longer get a multi-line record.
    layout_threshold: usize,
}

impl Default for CitationFormatter {
    fn default() -> Self {
        Self {
            layout_threshold: 15,
        }
    }
}

impl CitationFormatter {
    /// Create a new formatter with the default threshold of 15.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &CitationConfig) -> Self {
        Self::new().with_layout_threshold(config.layout_threshold)
    }

    /// Create a formatter with a custom layout threshold.
    pub fn with_layout_threshold(mut self, threshold: usize) -> Self {
        self.layout_threshold = threshold;
        self
    }

    /// Layout to use for a title, decided on its unescaped length.
    pub fn layout_for(&self, title: &NormalizedTitle) -> CitationLayout {
        CitationLayout::for_length(title.layout_len(), self.layout_threshold)
    }

    /// Format a citation.
    ///
    /// The title is escaped here; `user`, `number` and `translation` are
    /// inserted as given.
    ///
    /// # Example output
    /// ```text
    /// {{Cite tweet
    /// |user=boku__yaba |number=123 |title=第5話 |translation=Chapter 5
    /// }}
    /// ```
    pub fn format(
        &self,
        user: &str,
        number: &str,
        title: &NormalizedTitle,
        translation: &str,
    ) -> CitationMarkup {
        let layout = self.layout_for(title);
        let title = escape_special_characters(title.as_str());
        log::debug!("Formatting citation for {}/{} as {:?}", user, number, layout);

        let markup = match layout {
            CitationLayout::SingleLine => format!(
                "{{{{Cite tweet\n|user={} |number={} |title={} |translation={}\n}}}}",
                user, number, title, translation
            ),
            CitationLayout::MultiLine => format!(
                "{{{{Cite tweet\n|user={} |number={}\n|title={}\n|translation={}\n}}}}",
                user, number, title, translation
            ),
        };
        CitationMarkup::new(markup)
    }
}
