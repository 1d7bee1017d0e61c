//! Fuzzy matching: Levenshtein distance and the per-word match rules.
//!
//! Distances are computed over `char`s after lower-casing, so multi-codepoint
//! grapheme clusters may count as more than one edit. Known limitation; the
//! catalog is overwhelmingly single-codepoint text.

/// Patterns this short or shorter match only as word prefixes, with no edit
/// tolerance. Keeps one- and two-letter queries from matching near-randomly.
pub const SHORT_PATTERN_MAX_LEN: usize = 3;

/// Up to this pattern length the prefix check allows a single edit.
const PREFIX_SINGLE_EDIT_MAX_LEN: usize = 5;

/// Prefix edit allowance for longer patterns, as a fraction of pattern length.
const PREFIX_EDIT_FRACTION: f64 = 0.25;

/// Whole-word edit allowance as a fraction of pattern length.
const WORD_EDIT_FRACTION: f64 = 0.3;

/// Whole-word comparison is skipped when the lengths differ by more than this.
const WORD_LENGTH_GAP: usize = 3;

/// Calculate Levenshtein edit distance between two strings, ignoring case.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions, or substitutions needed
/// to transform `a` into `b`. Symmetric: `distance(a, b) == distance(b, a)`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.to_lowercase().chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Decide whether `candidate` matches `pattern`, tolerating typos.
///
/// Checks, in precedence order:
/// 1. Case-insensitive substring containment.
/// 2. For patterns of up to three characters: whether any
///    whitespace-delimited word of `candidate` starts with the pattern.
/// 3. Per word of `candidate`: exact equality, a bounded-edit-distance prefix
///    comparison (so "camam" reaches "camembert"), and a bounded-edit-distance
///    whole-word comparison gated on similar lengths.
///
/// Empty inputs never match. The edit allowances are tuned values, not
/// derived ones.
///
/// # Arguments
/// * `candidate` - Field text to test
/// * `pattern` - Query term
///
/// # Returns
/// true if the candidate is accepted for this pattern
pub fn fuzzy_match(candidate: &str, pattern: &str) -> bool {
    if candidate.is_empty() || pattern.is_empty() {
        return false;
    }

    let candidate = candidate.to_lowercase();
    let pattern = pattern.to_lowercase();

    if candidate.contains(&pattern) {
        return true;
    }

    let pattern_len = pattern.chars().count();
    if pattern_len <= SHORT_PATTERN_MAX_LEN {
        return candidate
            .split_whitespace()
            .any(|word| word.starts_with(&pattern));
    }

    candidate
        .split_whitespace()
        .any(|word| word_matches(word, &pattern, pattern_len))
}

/// Per-word fuzzy rules for patterns longer than `SHORT_PATTERN_MAX_LEN`.
/// Both `word` and `pattern` are already lower-cased.
fn word_matches(word: &str, pattern: &str, pattern_len: usize) -> bool {
    if word == pattern {
        return true;
    }

    // Prefix check: compare the first pattern_len characters of the word
    // (the whole word if shorter) so a truncated or typo'd prefix still hits.
    let prefix: String = word.chars().take(pattern_len).collect();
    let max_prefix_distance = if pattern_len <= PREFIX_SINGLE_EDIT_MAX_LEN {
        1
    } else {
        (pattern_len as f64 * PREFIX_EDIT_FRACTION).ceil() as usize
    };
    if levenshtein_distance(&prefix, pattern) <= max_prefix_distance {
        return true;
    }

    // Whole-word check, skipped when the lengths are too far apart to be a
    // plausible typo of each other.
    let word_len = word.chars().count();
    if word_len.abs_diff(pattern_len) <= WORD_LENGTH_GAP {
        let max_distance = (pattern_len as f64 * WORD_EDIT_FRACTION).ceil() as usize;
        if levenshtein_distance(word, pattern) <= max_distance {
            return true;
        }
    }

    false
}
