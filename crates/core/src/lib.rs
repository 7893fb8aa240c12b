//! Core text normalization and `{{Cite tweet}}` formatting for the
//! BokuYaba wiki.
//!
//! Everything here is synchronous and pure: callers hand in post content
//! and get back wiki markup strings.

pub mod archive;
pub mod citation;
pub mod config;
pub mod date;
pub mod error;
pub mod escape;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod search;
pub mod status;
pub mod teaser;
pub mod types;

pub use citation::CitationFormatter;
pub use config::CitationConfig;
pub use date::{mdy_to_iso, DateExpander};
pub use error::{Error, Result};
pub use escape::escape_special_characters;
pub use extract::extract_text;
pub use normalize::{NormalizedTitle, SourceTextNormalizer, TranslationNormalizer};
pub use pipeline::{CitationOutputs, CitationPipeline};
pub use search::SearchListGenerator;
pub use status::StatusPath;
pub use teaser::TeaserTextGenerator;
pub use types::{
    CitationLayout, CitationMarkup, CitationRequest, ContentCategory, TeaserResult, TitleNode,
};
