//! Tests for the JavaScript-facing exports, run with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use bokuyaba_core::{CitationOutputs, CitationRequest};
use bokuyaba_wasm::{cite_tweet, expand_date, wayback_cite_params};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_cite_tweet_from_js_object() {
    let request = CitationRequest::new("boku__yaba", "123").with_text("第5話");
    let value = serde_wasm_bindgen::to_value(&request).unwrap();

    let result = cite_tweet(value, "Chapter 5").unwrap();
    let outputs: CitationOutputs = serde_wasm_bindgen::from_value(result).unwrap();

    assert_eq!(
        outputs.ref_tag,
        "<ref>{{Cite tweet\n|user=boku__yaba |number=123 |title=第5話 |translation=Chapter 5\n}}</ref>"
    );
}

#[wasm_bindgen_test]
fn test_cite_tweet_rejects_non_object() {
    assert!(cite_tweet(wasm_bindgen::JsValue::from_f64(1.0), "").is_err());
}

#[wasm_bindgen_test]
fn test_errors_become_js_values() {
    assert_eq!(
        expand_date("3:00 PM · Jan 2, 2024").unwrap(),
        "3:00 PM · January 2nd, 2024"
    );
    assert!(expand_date("3:00 PM · Foo 2, 2024").is_err());
    assert!(wayback_cite_params("https://archive.ph/abc").is_err());
}
