//! Query-term synonym expansion.
//!
//! One static table maps the names, alternate spellings, and common
//! misspellings Fromagio users actually type to a shared term set. Groups
//! are scanned in declaration order and only the first matching group is
//! applied; a term that could belong to two groups receives the earlier
//! group's members only.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// A set of terms treated as equivalent when any one of them is typed.
#[derive(Debug)]
struct SynonymGroup {
    members: &'static [&'static str],
}

impl SynonymGroup {
    const fn new(members: &'static [&'static str]) -> Self {
        Self { members }
    }

    /// True when `term` equals a member, contains a member as a substring,
    /// or is itself a substring of a member. `term` must already be trimmed
    /// and lower-cased.
    fn matches(&self, term: &str) -> bool {
        self.members
            .iter()
            .any(|member| term == *member || term.contains(member) || member.contains(term))
    }
}

/// Cheese-domain synonym table, built once at first use and immutable
/// afterwards. Members include the misspellings seen most often in search
/// telemetry. Groups are kept disjoint by convention, not by construction.
static SYNONYM_GROUPS: Lazy<Vec<SynonymGroup>> = Lazy::new(|| {
    vec![
        SynonymGroup::new(&["mozzarella", "mozarella", "mozzarela", "mozza"]),
        SynonymGroup::new(&["goat", "chevre", "chèvre", "caprino"]),
        SynonymGroup::new(&["blue", "bleu", "blue vein"]),
        SynonymGroup::new(&["cheddar", "chedar", "chedder"]),
        SynonymGroup::new(&["camembert", "camambert", "camenbert"]),
        SynonymGroup::new(&["brie", "bree"]),
        SynonymGroup::new(&["parmesan", "parmigiano", "parmigiano reggiano", "parmezan"]),
        SynonymGroup::new(&["gruyere", "gruyère", "gruyer"]),
        SynonymGroup::new(&["swiss", "emmental", "emmentaler", "emmenthal"]),
        SynonymGroup::new(&["gouda", "gauda"]),
        SynonymGroup::new(&["manchego", "manchago"]),
        SynonymGroup::new(&["sheep", "ewe", "brebis"]),
        SynonymGroup::new(&["ricotta", "ricota"]),
        SynonymGroup::new(&["washed rind", "washed-rind", "stinky"]),
    ]
});

/// Expand a raw query term into its synonym-equivalent term set.
///
/// The term is trimmed and lower-cased (idempotent), so callers may pass
/// raw input. The returned set always contains the normalized term itself;
/// when a group matches, the group's full member set is added.
///
/// An empty term yields an empty set; callers route empty queries to
/// discovery mode before expansion.
pub fn expand(term: &str) -> HashSet<String> {
    let normalized = term.trim().to_lowercase();
    let mut terms = HashSet::new();
    if normalized.is_empty() {
        return terms;
    }

    if let Some(group) = SYNONYM_GROUPS.iter().find(|group| group.matches(&normalized)) {
        terms.extend(group.members.iter().map(|member| (*member).to_string()));
    }

    terms.insert(normalized);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelling_expands_to_group() {
        let terms = expand("mozarella");
        assert!(terms.contains("mozzarella"));
        assert!(terms.contains("mozza"));
        assert!(terms.contains("mozarella"));
    }

    #[test]
    fn test_key_term_includes_itself() {
        // The group key is a member like any other
        let terms = expand("goat");
        assert!(terms.contains("goat"));
        assert!(terms.contains("chevre"));
        assert!(terms.contains("chèvre"));
    }

    #[test]
    fn test_unknown_term_is_singleton() {
        let terms = expand("halloumi");
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("halloumi"));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        assert_eq!(expand("  GOAT "), expand("goat"));
    }

    #[test]
    fn test_substring_containment_matches() {
        // "goat cheese" contains the member "goat"
        let terms = expand("goat cheese");
        assert!(terms.contains("chevre"));
        assert!(terms.contains("goat cheese"));
    }

    #[test]
    fn test_first_match_wins() {
        // Contains members of both the goat group and the blue group; the
        // goat group is declared first and takes the term.
        let terms = expand("chevre bleu");
        assert!(terms.contains("goat"));
        assert!(!terms.contains("blue"));
    }

    #[test]
    fn test_empty_term_yields_empty_set() {
        assert!(expand("   ").is_empty());
    }
}
