//! Relevance scoring and ranking over catalog records.

use crate::fuzzy::fuzzy_match;
use crate::synonyms::expand;
use crate::{SearchHit, SearchRecord};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::debug;

// Field importance multipliers. The relative order is the contract — a title
// hit always outweighs a producer hit — the magnitudes are tunable.
const WEIGHT_TITLE: u32 = 10;
const WEIGHT_CATEGORY: u32 = 9;
const WEIGHT_SUBCATEGORY: u32 = 8;
const WEIGHT_FLAVOR: u32 = 8;
const WEIGHT_AROMA: u32 = 7;
const WEIGHT_DESCRIPTION: u32 = 5;
const WEIGHT_ORIGIN: u32 = 4;
const WEIGHT_PRODUCER: u32 = 3;

/// The record's text fields paired with their weights, in weight order.
fn weighted_fields(record: &SearchRecord) -> [(Option<&str>, u32); 8] {
    [
        (record.title.as_deref(), WEIGHT_TITLE),
        (record.category.as_deref(), WEIGHT_CATEGORY),
        (record.subcategory.as_deref(), WEIGHT_SUBCATEGORY),
        (record.flavor.as_deref(), WEIGHT_FLAVOR),
        (record.aroma.as_deref(), WEIGHT_AROMA),
        (record.description.as_deref(), WEIGHT_DESCRIPTION),
        (record.origin.as_deref(), WEIGHT_ORIGIN),
        (record.producer.as_deref(), WEIGHT_PRODUCER),
    ]
}

/// Accumulate the relevance score of one record against an expanded term set.
///
/// Every (term, populated field) pair that the fuzzy matcher accepts adds
/// that field's weight. Absent fields contribute nothing; a score of 0 means
/// the record should not appear in results.
pub fn score_record(record: &SearchRecord, terms: &HashSet<String>) -> u32 {
    let mut score = 0;
    for term in terms {
        for (value, weight) in weighted_fields(record) {
            if let Some(value) = value {
                if fuzzy_match(value, term) {
                    score += weight;
                }
            }
        }
    }
    score
}

/// Search the candidate pool and return all matching records, best first.
///
/// Equivalent to [`search_limited`] with no result cap.
pub fn search(query: &str, pool: &[SearchRecord]) -> Vec<SearchHit> {
    search_limited(query, pool, None)
}

/// Search the candidate pool, returning at most `max_results` hits.
///
/// The query is trimmed and expanded through the synonym table; each record
/// is scored per [`score_record`] and zero-score records are dropped.
/// Surviving hits are sorted by descending score with a stable sort, so
/// records with equal scores keep the order they were supplied in.
///
/// An empty (or whitespace-only) query switches to discovery mode: the whole
/// pool comes back unscored in shuffled order. See [`discover`].
pub fn search_limited(
    query: &str,
    pool: &[SearchRecord],
    max_results: Option<usize>,
) -> Vec<SearchHit> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        let mut hits = discover(pool);
        if let Some(max) = max_results {
            hits.truncate(max);
        }
        return hits;
    }

    let terms = expand(trimmed);
    debug!(
        query = trimmed,
        terms = terms.len(),
        candidates = pool.len(),
        "scoring candidate pool"
    );

    #[cfg(feature = "parallel")]
    let mut hits: Vec<SearchHit> = {
        use rayon::prelude::*;
        pool.par_iter()
            .filter_map(|record| score_hit(record, &terms))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut hits: Vec<SearchHit> = pool
        .iter()
        .filter_map(|record| score_hit(record, &terms))
        .collect();

    // Stable sort: ties keep supply order, which callers rely on.
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(max) = max_results {
        hits.truncate(max);
    }

    debug!(results = hits.len(), "search complete");
    hits
}

fn score_hit(record: &SearchRecord, terms: &HashSet<String>) -> Option<SearchHit> {
    let score = score_record(record, terms);
    (score > 0).then(|| SearchHit {
        id: record.id,
        kind: record.kind,
        score,
    })
}

/// Return the whole pool unscored, in shuffled order.
///
/// This is the no-query browsing mode; it is deliberately not a degenerate
/// case of scoring. Production callers use this thread-local-RNG variant.
pub fn discover(pool: &[SearchRecord]) -> Vec<SearchHit> {
    discover_with(pool, &mut rand::thread_rng())
}

/// [`discover`] with an injected random source, so tests can seed it.
pub fn discover_with<R: Rng + ?Sized>(pool: &[SearchRecord], rng: &mut R) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = pool
        .iter()
        .map(|record| SearchHit {
            id: record.id,
            kind: record.kind,
            score: 0,
        })
        .collect();
    hits.shuffle(rng);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cheese(id: i64, title: &str) -> SearchRecord {
        let mut record = SearchRecord::new(id, RecordKind::Cheese);
        record.title = Some(title.to_string());
        record
    }

    #[test]
    fn test_zero_score_records_are_excluded() {
        let pool = vec![cheese(1, "Aged Cheddar"), cheese(2, "Roquefort")];
        let hits = search("roquefort", &pool);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_title_outweighs_producer() {
        let mut by_producer = SearchRecord::new(1, RecordKind::ProducerCheese);
        by_producer.producer = Some("Gouda Brothers".to_string());
        let by_title = cheese(2, "Smoked Gouda");

        let hits = search("gouda", &[by_producer, by_title]);
        assert_eq!(hits[0].id, 2);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_multiple_fields_accumulate() {
        let mut record = cheese(1, "Chevre Frais");
        record.category = Some("goat".to_string());
        let terms = expand("chevre");
        // Title and category both match members of the goat group
        assert!(score_record(&record, &terms) > WEIGHT_TITLE);
    }

    #[test]
    fn test_tied_scores_keep_supply_order() {
        let pool = vec![
            cheese(10, "Brie de Meaux"),
            cheese(20, "Brie de Melun"),
            cheese(30, "Brie Noir"),
        ];
        let hits = search("brie", &pool);
        let ids: Vec<i64> = hits.iter().map(|hit| hit.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_goat_query_reaches_chevre() {
        let pool = vec![
            cheese(1, "Aged Cheddar"),
            cheese(2, "Brie de Meaux"),
            cheese(3, "Chevre log"),
        ];
        let hits = search("goat", &pool);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
        assert!(hits[0].score > 0);
    }

    #[test]
    fn test_empty_pool_gives_empty_result() {
        assert!(search("brie", &[]).is_empty());
    }

    #[test]
    fn test_max_results_truncates() {
        let pool = vec![
            cheese(1, "Brie de Meaux"),
            cheese(2, "Brie de Melun"),
            cheese(3, "Brie Noir"),
        ];
        let hits = search_limited("brie", &pool, Some(2));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_query_returns_whole_pool_unscored() {
        let pool = vec![cheese(1, "Gouda"), cheese(2, "Brie"), cheese(3, "Feta")];
        let hits = search("   ", &pool);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|hit| hit.score == 0));
        let mut ids: Vec<i64> = hits.iter().map(|hit| hit.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_discovery_is_deterministic_under_a_seed() {
        let pool: Vec<SearchRecord> = (0..20).map(|i| cheese(i, "Tomme")).collect();
        let a = discover_with(&pool, &mut StdRng::seed_from_u64(42));
        let b = discover_with(&pool, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_record_scores_nothing() {
        // No populated fields at all
        let bare = SearchRecord::new(9, RecordKind::User);
        let hits = search("brie", &[bare]);
        assert!(hits.is_empty());
    }
}
