//! WASM bindings for the search crate.
//!
//! JSON-string boundary used by the app shell; mirrors the native API.

use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Check whether a candidate string fuzzy-matches a query term.
#[wasm_bindgen]
pub fn fuzzy_contains(candidate: &str, pattern: &str) -> bool {
    crate::fuzzy_match(candidate, pattern)
}

/// Expand a query term through the synonym table.
///
/// # Returns
/// JSON array of equivalent terms, sorted for deterministic output.
#[wasm_bindgen]
pub fn expand_query_terms(term: &str) -> String {
    let mut terms: Vec<String> = crate::expand(term).into_iter().collect();
    terms.sort();
    serde_json::to_string(&terms).unwrap_or_else(|_| "[]".to_string())
}

/// Search catalog records and return ranked hits as JSON.
///
/// # Arguments
/// * `query` - Raw query string; empty switches to discovery mode
/// * `records_json` - JSON array of catalog records
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of hits with `id`, `kind`, and `score`, best first
#[wasm_bindgen]
pub fn search_records(
    query: &str,
    records_json: &str,
    max_results: u32,
) -> Result<String, JsValue> {
    let records = crate::records_from_json(records_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let max = if max_results == 0 {
        None
    } else {
        Some(max_results as usize)
    };
    let hits = crate::search_limited(query, &records, max);

    serde_json::to_string(&hits)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
