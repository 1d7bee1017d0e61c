//! WASM bindings for the feed crate.
//!
//! JSON-string boundary used by the app shell; mirrors the native API.

use wasm_bindgen::prelude::*;

/// Assemble the home feed from recommender outputs.
///
/// # Arguments
/// * `sources_json` - JSON object with `recommended`, `trending`,
///   `discovery`, `award_winners`, `editorial`, and `sponsored` arrays
///   (absent arrays default to empty)
///
/// # Returns
/// JSON array of feed items with `id` and `kind`, in display order
#[wasm_bindgen]
pub fn interleave_feed(sources_json: &str) -> Result<String, JsValue> {
    let sources = crate::sources_from_json(sources_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let feed = crate::build_feed(sources);

    serde_json::to_string(&feed)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
