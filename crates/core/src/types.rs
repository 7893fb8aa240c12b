//! Domain types for representing post content and produced markup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One content node of a post's text: a text run or an emoji image.
///
/// Emojis are rendered as `<img>` tags whose alt text is the emoji itself,
/// so both fields contribute to the extracted title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleNode {
    /// Visible text of the node.
    pub text: String,

    /// Alternative text of an image node.
    pub alt_text: String,
}

impl TitleNode {
    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alt_text: String::new(),
        }
    }

    /// Create an image node carrying only alternative text.
    pub fn image(alt_text: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            alt_text: alt_text.into(),
        }
    }
}

/// Everything needed to cite a single post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationRequest {
    /// Author handle, without the `@`.
    pub user: String,

    /// Numeric post identifier.
    pub number: String,

    /// Content nodes of the post text, in document order.
    pub title_nodes: Vec<TitleNode>,
}

impl CitationRequest {
    /// Create a request with no title nodes.
    pub fn new(user: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            number: number.into(),
            title_nodes: Vec::new(),
        }
    }

    /// Add a content node to the title.
    pub fn with_node(mut self, node: TitleNode) -> Self {
        self.title_nodes.push(node);
        self
    }

    /// Add a plain text node to the title.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_node(TitleNode::text(text))
    }

    /// Raw title text, concatenated from all nodes.
    pub fn raw_title(&self) -> String {
        crate::extract::extract_text(&self.title_nodes)
    }

    /// Check that the user is non-empty and the number is all ASCII digits.
    ///
    /// Not called unless strict validation is configured.
    pub fn validate(&self) -> crate::Result<()> {
        if self.user.is_empty() {
            return Err(crate::Error::MalformedInput("empty user handle".into()));
        }
        if self.number.is_empty() || !self.number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(crate::Error::MalformedInput(format!(
                "post number must be digits, got {:?}",
                self.number
            )));
        }
        Ok(())
    }
}

/// How a `{{Cite tweet}}` record is laid out in wiki source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationLayout {
    /// All four fields on one line.
    SingleLine,
    /// Title and translation each on their own line.
    MultiLine,
}

impl CitationLayout {
    /// Pick the layout for a title of the given length.
    pub fn for_length(title_length: usize, threshold: usize) -> Self {
        if title_length < threshold {
            Self::SingleLine
        } else {
            Self::MultiLine
        }
    }
}

/// Which series a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentCategory {
    /// "The Dangers in My Heart" itself.
    MainSeries,
    /// The "Rabukomedi ga Hajimaranai" spinoff.
    Spinoff,
}

impl ContentCategory {
    /// Classify a raw (pre-normalization) title by the spinoff marker.
    pub fn classify(raw_title: &str, spinoff_marker: &str) -> Self {
        if !spinoff_marker.is_empty() && raw_title.contains(spinoff_marker) {
            Self::Spinoff
        } else {
            Self::MainSeries
        }
    }
}

/// A complete `{{Cite tweet}}` template invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationMarkup(String);

impl CitationMarkup {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    /// The bare template markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap as an inline footnote: `<ref>…</ref>`.
    pub fn ref_tag(&self) -> String {
        format!("<ref>{}</ref>", self.0)
    }

    /// Format as a wiki list item: `* …`.
    pub fn list_item(&self) -> String {
        format!("* {}", self.0)
    }

    /// Consume into the markup string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CitationMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CitationMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Teaser prose for an episode release, with its citation footnote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaserResult {
    /// Series the prose was written for.
    pub category: ContentCategory,

    /// The prose, ending with `<ref>` + `embedded_citation` + `</ref>`.
    pub prose: String,

    /// Citation embedded in the prose, with an empty translation.
    pub embedded_citation: CitationMarkup,
}
