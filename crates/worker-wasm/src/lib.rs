//! WASM-compatible wrapper for BokuYaba citation formatting.
//!
//! This crate exposes the citation pipeline to JavaScript so the user
//! script only has to find the post on the page and copy the results.

use bokuyaba_core::archive;
use bokuyaba_core::{
    CitationConfig, CitationOutputs, CitationPipeline, CitationRequest, DateExpander,
    SearchListGenerator, StatusPath,
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use wasm_bindgen::prelude::*;

/// Pipeline with the built-in configuration, built on first use.
static DEFAULT_PIPELINE: LazyLock<Result<CitationPipeline, String>> =
    LazyLock::new(|| CitationPipeline::with_defaults().map_err(|e| e.to_string()));

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of parsing the current page's post path.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResult {
    /// Author handle.
    pub user: String,
    /// Post number.
    pub number: String,
    /// Canonical link to the post.
    pub post_url: String,
    /// Whether the helper should activate for this author.
    pub recognized: bool,
}

/// Format every citation output for a post.
///
/// # Arguments
/// * `request` - A `{ user, number, title_nodes: [{ text, alt_text }] }` object
/// * `translation` - English translation, or an empty string
///
/// # Returns
/// A JavaScript object with `citation`, `ref_tag`, `list_item` and `teaser`.
#[wasm_bindgen]
pub fn cite_tweet(request: JsValue, translation: &str) -> Result<JsValue, JsValue> {
    let request: CitationRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid citation request: {}", e)))?;

    let result = cite_tweet_impl(&request, translation).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn cite_tweet_impl(request: &CitationRequest, translation: &str) -> Result<CitationOutputs, String> {
    let pipeline = DEFAULT_PIPELINE.as_ref().map_err(Clone::clone)?;
    pipeline.run(request, translation).map_err(|e| e.to_string())
}

/// Expand a timestamp such as `3:00 PM · Jan 2, 2024`.
#[wasm_bindgen]
pub fn expand_date(timestamp: &str) -> Result<String, JsValue> {
    DateExpander::new()
        .expand(timestamp)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a prose date such as `January 2nd, 2024` to `2024-01-02`.
#[wasm_bindgen]
pub fn mdy_date_to_iso(date: &str) -> Result<String, JsValue> {
    bokuyaba_core::mdy_to_iso(date).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the chapter search list from ISO release dates, one per line.
#[wasm_bindgen]
pub fn twitter_searches(dates: &str) -> Result<String, JsValue> {
    twitter_searches_impl(dates).map_err(|e| JsValue::from_str(&e))
}

fn twitter_searches_impl(dates: &str) -> Result<String, String> {
    let dates = SearchListGenerator::parse_dates(dates).map_err(|e| e.to_string())?;
    Ok(SearchListGenerator::new().generate(&dates))
}

/// Parse a `/<user>/status/<number>` path.
#[wasm_bindgen]
pub fn parse_status_path(path: &str) -> Result<JsValue, JsValue> {
    let result = parse_status_path_impl(path).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_status_path_impl(path: &str) -> Result<StatusResult, String> {
    let status = StatusPath::parse(path).map_err(|e| e.to_string())?;
    Ok(StatusResult {
        post_url: status.post_url(),
        recognized: is_recognized_author(&status.user),
        user: status.user,
        number: status.number,
    })
}

/// Whether the helper should activate for this author.
#[wasm_bindgen]
pub fn is_recognized_author(handle: &str) -> bool {
    CitationConfig::default().is_recognized_author(handle)
}

/// Archive params for a Wayback Machine snapshot URL.
#[wasm_bindgen]
pub fn wayback_cite_params(snapshot_url: &str) -> Result<String, JsValue> {
    archive::wayback_cite_params(snapshot_url).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rewrite archive.today's wikicode into the wiki's citation style.
#[wasm_bindgen]
pub fn clean_archive_today_wikicode(wikicode: &str) -> String {
    archive::clean_archive_today_wikicode(wikicode)
}
