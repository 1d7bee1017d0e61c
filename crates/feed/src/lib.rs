//! Deterministic feed interleaving for the Fromagio home feed.
//!
//! This crate provides:
//! - A fixed repeating take-pattern over ranked content streams
//! - Global deduplication across overlapping recommender outputs
//! - Assembly of the primary stream from its recommender sub-lists
//!
//! The interleaver is pure and stateless per call; ordering is fully
//! deterministic given deterministic inputs.
//!
//! # Example
//!
//! ```
//! use fromagio_feed::{build_feed, FeedItem, FeedKind, FeedSources};
//!
//! let sources = FeedSources {
//!     recommended: vec![FeedItem::new(1, FeedKind::Cheese)],
//!     editorial: vec![FeedItem::new(2, FeedKind::Article)],
//!     ..FeedSources::default()
//! };
//!
//! let feed = build_feed(sources);
//! assert_eq!(feed.len(), 2);
//! assert_eq!(feed[0].id, 1);
//! ```

mod interleave;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use interleave::{build_feed, interleave};
pub use error::{FeedError, Result};

/// Kind discriminator for feed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// A cheese card
    Cheese,
    /// An editorial article
    Article,
    /// A recipe
    Recipe,
    /// A sponsored placement
    Sponsored,
}

/// One item of a ranked content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeedItem {
    /// Item identifier, unique across all streams
    pub id: i64,
    /// Kind discriminator
    pub kind: FeedKind,
}

impl FeedItem {
    /// Creates a feed item.
    #[inline]
    pub fn new(id: i64, kind: FeedKind) -> Self {
        Self { id, kind }
    }
}

/// The three streams the interleaver draws from, each already ranked by the
/// upstream recommender. Not mutated by the interleaver.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FeedStreams {
    /// Merged primary content (recommendations, trending, discovery, awards)
    #[serde(default)]
    pub primary: Vec<FeedItem>,
    /// Editorial content
    #[serde(default)]
    pub editorial: Vec<FeedItem>,
    /// Sponsored content
    #[serde(default)]
    pub sponsored: Vec<FeedItem>,
}

/// The raw recommender outputs a feed load starts from.
///
/// The four primary sub-lists are generated independently and routinely
/// overlap; [`FeedSources::into_streams`] concatenates them in a fixed order
/// and the interleaver's global dedup drops repeats.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FeedSources {
    /// Personal recommendations
    #[serde(default)]
    pub recommended: Vec<FeedItem>,
    /// Trending items
    #[serde(default)]
    pub trending: Vec<FeedItem>,
    /// Discovery picks
    #[serde(default)]
    pub discovery: Vec<FeedItem>,
    /// Award-winning cheeses
    #[serde(default)]
    pub award_winners: Vec<FeedItem>,
    /// Editorial content
    #[serde(default)]
    pub editorial: Vec<FeedItem>,
    /// Sponsored content
    #[serde(default)]
    pub sponsored: Vec<FeedItem>,
}

impl FeedSources {
    /// Merge the primary sub-lists, in their fixed order, into the three
    /// streams the interleaver consumes.
    pub fn into_streams(self) -> FeedStreams {
        let mut primary = self.recommended;
        primary.extend(self.trending);
        primary.extend(self.discovery);
        primary.extend(self.award_winners);

        FeedStreams {
            primary,
            editorial: self.editorial,
            sponsored: self.sponsored,
        }
    }
}

/// Decode recommender output handed over by the app shell.
///
/// # Errors
/// Returns [`FeedError::InvalidPayload`] if the payload does not decode.
pub fn sources_from_json(json: &str) -> Result<FeedSources> {
    Ok(serde_json::from_str(json)?)
}
