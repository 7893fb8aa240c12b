//! The full chain from post content to copy-paste wiki markup.

use crate::citation::CitationFormatter;
use crate::config::CitationConfig;
use crate::error::Result;
use crate::normalize::{SourceTextNormalizer, TranslationNormalizer};
use crate::teaser::TeaserTextGenerator;
use crate::types::{CitationMarkup, CitationRequest, TeaserResult};
use serde::{Deserialize, Serialize};

/// Everything the editor may want to paste for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationOutputs {
    /// The bare citation.
    pub citation: CitationMarkup,

    /// The citation as an inline footnote.
    pub ref_tag: String,

    /// The citation as a sandbox list item.
    pub list_item: String,

    /// Teaser prose with its own citation.
    pub teaser: TeaserResult,
}

/// Citation pipeline built from one configuration.
///
/// Holds no per-request state, so one instance can serve any number of
/// requests, from any number of threads.
#[derive(Debug, Clone)]
pub struct CitationPipeline {
    config: CitationConfig,
    source_normalizer: SourceTextNormalizer,
    translation_normalizer: TranslationNormalizer,
    formatter: CitationFormatter,
    teaser_generator: TeaserTextGenerator,
}

impl CitationPipeline {
    /// Build a pipeline from configuration.
    pub fn new(config: CitationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source_normalizer: SourceTextNormalizer::from_config(&config),
            translation_normalizer: TranslationNormalizer::from_config(&config)?,
            formatter: CitationFormatter::from_config(&config),
            teaser_generator: TeaserTextGenerator::from_config(&config),
            config,
        })
    }

    /// Build a pipeline with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(CitationConfig::default())
    }

    pub fn config(&self) -> &CitationConfig {
        &self.config
    }

    /// Format the citation for a post.
    ///
    /// `translation` may be empty. Only fails when strict validation is
    /// configured and the request's user or number is malformed.
    pub fn cite(&self, request: &CitationRequest, translation: &str) -> Result<CitationMarkup> {
        self.check(request)?;
        Ok(self.format_citation(request, translation))
    }

    /// Generate teaser prose for a post.
    pub fn teaser(&self, request: &CitationRequest) -> Result<TeaserResult> {
        self.check(request)?;
        Ok(self.generate_teaser(request))
    }

    /// Produce every output for a post.
    pub fn run(&self, request: &CitationRequest, translation: &str) -> Result<CitationOutputs> {
        self.check(request)?;
        let citation = self.format_citation(request, translation);
        let teaser = self.generate_teaser(request);
        log::debug!(
            "Produced citation and {:?} teaser for {}/{}",
            teaser.category,
            request.user,
            request.number
        );
        Ok(CitationOutputs {
            ref_tag: citation.ref_tag(),
            list_item: citation.list_item(),
            citation,
            teaser,
        })
    }

    fn format_citation(&self, request: &CitationRequest, translation: &str) -> CitationMarkup {
        let title = self.source_normalizer.normalize(&request.raw_title());
        let translation = self.translation_normalizer.normalize(translation);
        self.formatter
            .format(&request.user, &request.number, &title, &translation)
    }

    fn generate_teaser(&self, request: &CitationRequest) -> TeaserResult {
        self.teaser_generator
            .generate(&request.user, &request.number, &request.raw_title())
    }

    fn check(&self, request: &CitationRequest) -> Result<()> {
        if self.config.strict_validation {
            if let Err(e) = request.validate() {
                log::warn!("Rejecting citation request: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentCategory, TitleNode};
    use crate::Error;

    fn request() -> CitationRequest {
        CitationRequest::new("boku__yaba", "1790000000000000000")
            .with_text("【更新】#僕ヤバ 最新話")
            .with_node(TitleNode::image("🎧"))
            .with_text("\n続き→https://example.com")
    }

    #[test]
    fn test_run_produces_all_outputs() {
        let pipeline = CitationPipeline::with_defaults().unwrap();
        let outputs = pipeline
            .run(&request(), "[Update] #僕ヤバ My Heart Yabai latest chapter")
            .unwrap();

        assert_eq!(
            outputs.citation.as_str(),
            "{{Cite tweet\n|user=boku__yaba |number=1790000000000000000 \
             |title={{Hashtag}}僕ヤバ 最新話🎧 \
             |translation=#BokuYaba The Dangers in My Heart latest chapter\n}}"
        );
        assert_eq!(outputs.ref_tag, format!("<ref>{}</ref>", outputs.citation));
        assert_eq!(outputs.list_item, format!("* {}", outputs.citation));
        assert_eq!(outputs.teaser.category, ContentCategory::MainSeries);
    }

    #[test]
    fn test_empty_request_is_not_an_error() {
        let pipeline = CitationPipeline::with_defaults().unwrap();
        let citation = pipeline.cite(&CitationRequest::default(), "").unwrap();
        assert_eq!(
            citation.as_str(),
            "{{Cite tweet\n|user= |number= |title= |translation=\n}}"
        );
    }

    #[test]
    fn test_strict_validation() {
        let config = CitationConfig {
            strict_validation: true,
            ..CitationConfig::default()
        };
        let pipeline = CitationPipeline::new(config).unwrap();
        assert!(pipeline.cite(&request(), "").is_ok());
        assert!(matches!(
            pipeline.run(&CitationRequest::new("", "1"), ""),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_run_matches_cite_and_teaser() {
        let config = CitationConfig {
            strict_validation: true,
            ..CitationConfig::default()
        };
        let pipeline = CitationPipeline::new(config).unwrap();
        let outputs = pipeline.run(&request(), "Chapter 5").unwrap();
        assert_eq!(outputs.citation, pipeline.cite(&request(), "Chapter 5").unwrap());
        assert_eq!(outputs.teaser, pipeline.teaser(&request()).unwrap());
        assert!(matches!(
            pipeline.teaser(&CitationRequest::new("u", "x1")),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = CitationConfig::default();
        config.months.remove("Dec");
        assert!(CitationPipeline::new(config).is_err());
    }

    #[test]
    fn test_pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CitationPipeline>();
    }
}
