//! Synonym-aware fuzzy search for the Fromagio catalog.
//!
//! This crate provides:
//! - Query-term synonym expansion from a static cheese-domain table
//! - Typo-tolerant fuzzy matching with bounded Levenshtein distance
//! - Weighted per-field relevance scoring with stable ranking
//! - A shuffled discovery mode for empty queries
//!
//! The same logic previously lived in three app screens; every entry point
//! now imports this crate (natively or through the WASM bindings).
//!
//! # Example
//!
//! ```
//! use fromagio_search::{search, RecordKind, SearchRecord};
//!
//! let mut brie = SearchRecord::new(1, RecordKind::Cheese);
//! brie.title = Some("Brie de Meaux".into());
//! let mut gouda = SearchRecord::new(2, RecordKind::Cheese);
//! gouda.title = Some("Aged Gouda".into());
//!
//! let hits = search("brie", &[brie, gouda]);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//! ```

mod relevance;
mod fuzzy;
mod synonyms;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use relevance::{discover, discover_with, score_record, search, search_limited};
pub use fuzzy::{fuzzy_match, levenshtein_distance};
pub use synonyms::expand;
pub use error::{Result, SearchError};

/// Kind discriminator for catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A cheese in the shared catalog
    Cheese,
    /// A cheese listed by a specific producer
    ProducerCheese,
    /// An editorial article
    Article,
    /// A recipe
    Recipe,
    /// A user profile
    User,
}

/// A searchable catalog record.
///
/// Records arrive as read-only snapshots from the storage layer; fields the
/// storage layer did not populate stay `None` and contribute nothing to
/// scoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRecord {
    /// Record identifier
    pub id: i64,
    /// Kind discriminator
    pub kind: RecordKind,
    /// Display title or name
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Category name (e.g. "soft", "hard", "washed rind")
    #[serde(default)]
    pub category: Option<String>,
    /// Sub-category name
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Region or country of origin
    #[serde(default)]
    pub origin: Option<String>,
    /// Producer name
    #[serde(default)]
    pub producer: Option<String>,
    /// Flavor descriptors
    #[serde(default)]
    pub flavor: Option<String>,
    /// Aroma descriptors
    #[serde(default)]
    pub aroma: Option<String>,
}

impl SearchRecord {
    /// Creates a record with no text fields populated.
    pub fn new(id: i64, kind: RecordKind) -> Self {
        Self {
            id,
            kind,
            title: None,
            description: None,
            category: None,
            subcategory: None,
            origin: None,
            producer: None,
            flavor: None,
            aroma: None,
        }
    }
}

/// A scored search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchHit {
    /// Identifier of the matched record
    pub id: i64,
    /// Kind of the matched record
    pub kind: RecordKind,
    /// Relevance score (higher is better; 0 only in discovery mode)
    pub score: u32,
}

/// Decode a catalog snapshot handed over by the app shell.
///
/// # Errors
/// Returns [`SearchError::InvalidRecords`] if the payload is not a JSON
/// array of records.
pub fn records_from_json(json: &str) -> Result<Vec<SearchRecord>> {
    Ok(serde_json::from_str(json)?)
}
