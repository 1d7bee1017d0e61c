//! The round-pattern interleaver.

use crate::{FeedItem, FeedSources, FeedStreams};
use std::collections::HashSet;
use tracing::debug;

/// Which stream a pattern step draws from.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Primary,
    Editorial,
    Sponsored,
}

/// One repeating round of the feed: 3 primary, 1 editorial, 3 primary,
/// 1 sponsored. The counts are product decisions, not derived values.
const ROUND_PATTERN: &[(Stream, usize)] = &[
    (Stream::Primary, 3),
    (Stream::Editorial, 1),
    (Stream::Primary, 3),
    (Stream::Sponsored, 1),
];

/// Merge the ranked streams into one feed following the repeating round
/// pattern: 3 primary, 1 editorial, 3 primary, 1 sponsored.
///
/// Each step takes up to its count of next not-yet-placed items from its
/// stream; an item whose id was already placed is skipped (and its cursor
/// position consumed) even if it came from a different stream. A step that
/// finds nothing contributes zero items and the round continues; the loop
/// ends when a full round places nothing, which only happens once every
/// cursor has exhausted its stream.
///
/// Output ordering is fully deterministic given deterministic inputs.
pub fn interleave(streams: &FeedStreams) -> Vec<FeedItem> {
    let mut primary_cursor = 0;
    let mut editorial_cursor = 0;
    let mut sponsored_cursor = 0;

    // The seen set lives for exactly one call, so concurrent feed builds
    // never share dedup state.
    let mut seen: HashSet<i64> = HashSet::new();
    let mut output = Vec::new();

    loop {
        let placed_before = output.len();

        for &(stream, count) in ROUND_PATTERN {
            let (list, cursor) = match stream {
                Stream::Primary => (&streams.primary, &mut primary_cursor),
                Stream::Editorial => (&streams.editorial, &mut editorial_cursor),
                Stream::Sponsored => (&streams.sponsored, &mut sponsored_cursor),
            };
            take_unseen(list, cursor, count, &mut seen, &mut output);
        }

        if output.len() == placed_before {
            break;
        }
    }

    output
}

/// Append up to `count` not-yet-seen items from `list`, advancing `cursor`
/// past duplicates without counting them against the step.
fn take_unseen(
    list: &[FeedItem],
    cursor: &mut usize,
    count: usize,
    seen: &mut HashSet<i64>,
    output: &mut Vec<FeedItem>,
) {
    let mut taken = 0;
    while taken < count && *cursor < list.len() {
        let item = list[*cursor];
        *cursor += 1;
        if seen.insert(item.id) {
            output.push(item);
            taken += 1;
        }
    }
}

/// Assemble the home feed from raw recommender outputs.
///
/// Concatenates the primary sub-lists and interleaves the result with the
/// editorial and sponsored streams.
pub fn build_feed(sources: FeedSources) -> Vec<FeedItem> {
    let streams = sources.into_streams();
    debug!(
        primary = streams.primary.len(),
        editorial = streams.editorial.len(),
        sponsored = streams.sponsored.len(),
        "interleaving feed streams"
    );

    let feed = interleave(&streams);
    debug!(items = feed.len(), "feed assembled");
    feed
}
