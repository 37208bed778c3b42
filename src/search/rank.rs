//! Query ranker: tiered substring scoring over a catalog snapshot.

use crate::search::entry::{RankedResult, SearchableEntry};

pub const TITLE_WEIGHT: u32 = 10;
pub const SUBTITLE_WEIGHT: u32 = 5;
pub const KEYWORD_WEIGHT: u32 = 3;

/// Entries at or above this priority surface on an empty query.
pub const SURFACE_PRIORITY: i32 = 7;
pub const EMPTY_QUERY_LIMIT: usize = 8;
pub const QUERY_LIMIT: usize = 10;

/// Lower-cased, whitespace-split tokens. Duplicates are kept.
pub fn tokenize(query: &str) -> Vec<String> {
    query.trim().to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Best tier for one token: title, then subtitle, then keywords.
fn token_score(title: &str, subtitle: Option<&str>, keywords: &[String], token: &str) -> u32 {
    if title.contains(token) {
        TITLE_WEIGHT
    } else if subtitle.is_some_and(|s| s.contains(token)) {
        SUBTITLE_WEIGHT
    } else if keywords.iter().any(|k| k.contains(token)) {
        KEYWORD_WEIGHT
    } else {
        0
    }
}

/// Sum of per-token scores. Tokens must already be lower-cased.
pub fn score_entry(entry: &SearchableEntry, tokens: &[String]) -> u32 {
    let title = entry.title.to_lowercase();
    let subtitle = entry.subtitle.as_ref().map(|s| s.to_lowercase());
    tokens
        .iter()
        .map(|t| token_score(&title, subtitle.as_deref(), &entry.keywords, t))
        .sum()
}

/// Ranks `entries` for `query`, keeping scores. Sorting is stable, so ties
/// keep catalog order.
pub fn rank_scored<'a>(entries: &'a [SearchableEntry], query: &str) -> Vec<RankedResult<'a>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        let mut surfaced: Vec<RankedResult<'a>> = entries
            .iter()
            .filter(|e| e.kind.is_navigation() || e.priority >= SURFACE_PRIORITY)
            .map(|entry| RankedResult { entry, score: 0 })
            .collect();
        surfaced.sort_by(|a, b| b.entry.priority.cmp(&a.entry.priority));
        surfaced.truncate(EMPTY_QUERY_LIMIT);
        return surfaced;
    }

    let mut matches: Vec<RankedResult<'a>> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &tokens);
            (score > 0).then_some(RankedResult { entry, score })
        })
        .collect();
    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.entry.priority.cmp(&a.entry.priority))
    });
    matches.truncate(QUERY_LIMIT);
    tracing::debug!(tokens = tokens.len(), matches = matches.len(), "ranked query");
    matches
}

/// Ranked entries without scores.
pub fn rank<'a>(entries: &'a [SearchableEntry], query: &str) -> Vec<&'a SearchableEntry> {
    rank_scored(entries, query).into_iter().map(|r| r.entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Intent, Route};
    use crate::search::entry::EntryKind;

    fn nav(title: &str, keywords: &[&str]) -> SearchableEntry {
        SearchableEntry {
            id: format!("nav-{title}"),
            kind: EntryKind::Navigation { path: format!("/{title}"), icon: String::new() },
            title: title.to_string(),
            subtitle: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            priority: 5,
            invoke: Intent::Navigate(Route::Dashboard),
        }
    }

    fn record(title: &str, keywords: &[&str], priority: i32) -> SearchableEntry {
        SearchableEntry {
            id: format!("show-{title}"),
            kind: EntryKind::Record { show_id: title.to_string(), status: String::new(), upcoming: priority > 5 },
            title: title.to_string(),
            subtitle: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            priority,
            invoke: Intent::EditShow { index: 0, show_id: title.to_string() },
        }
    }

    fn action(title: &str, priority: i32) -> SearchableEntry {
        SearchableEntry {
            id: format!("action-{title}"),
            kind: EntryKind::Action,
            title: title.to_string(),
            subtitle: None,
            keywords: Vec::new(),
            priority,
            invoke: Intent::AddShow,
        }
    }

    fn titles(results: &[&SearchableEntry]) -> Vec<String> {
        results.iter().map(|e| e.title.clone()).collect()
    }

    fn scenario_catalog() -> Vec<SearchableEntry> {
        vec![
            nav("Finance", &["finance", "finanzas", "money"]),
            record("Paris Show", &["paris", "fr", "confirmed", "2025-06-01"], 10),
        ]
    }

    #[test]
    fn tokenize_trims_lowercases_and_keeps_duplicates() {
        assert_eq!(tokenize("  Madrid   MADRID\tfr "), vec!["madrid", "madrid", "fr"]);
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn title_prefix_query_finds_only_navigation() {
        let catalog = scenario_catalog();
        let results = rank_scored(&catalog, "fin");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.title, "Finance");
        assert_eq!(results[0].score, TITLE_WEIGHT);
    }

    #[test]
    fn empty_query_orders_by_priority() {
        let catalog = scenario_catalog();
        assert_eq!(titles(&rank(&catalog, "")), vec!["Paris Show", "Finance"]);
        assert_eq!(titles(&rank(&catalog, "   ")), vec!["Paris Show", "Finance"]);
    }

    #[test]
    fn empty_query_skips_low_priority_non_navigation() {
        let catalog = vec![
            record("Old Show", &[], 3),
            action("Export", 4),
            action("Add Show", 7),
            nav("Settings", &[]),
        ];
        assert_eq!(titles(&rank(&catalog, "")), vec!["Add Show", "Settings"]);
    }

    #[test]
    fn empty_query_is_stable_and_truncated() {
        let catalog: Vec<SearchableEntry> = (0..12).map(|i| nav(&format!("Page {i}"), &[])).collect();
        let results = rank(&catalog, "");
        assert_eq!(results.len(), EMPTY_QUERY_LIMIT);
        let expected: Vec<String> = (0..8).map(|i| format!("Page {i}")).collect();
        assert_eq!(titles(&results), expected);
    }

    #[test]
    fn tokens_add_their_best_tier() {
        let catalog = vec![record("Madrid Arena", &["spain", "confirmed"], 3)];
        let results = rank_scored(&catalog, "madrid confirmed");
        assert_eq!(results[0].score, TITLE_WEIGHT + KEYWORD_WEIGHT);
    }

    #[test]
    fn subtitle_scores_between_title_and_keywords() {
        let mut entry = record("Olympia", &["paris"], 3);
        entry.subtitle = Some("Paris, FR".into());
        let catalog = vec![entry];
        assert_eq!(rank_scored(&catalog, "paris")[0].score, SUBTITLE_WEIGHT);
        assert_eq!(rank_scored(&catalog, "OLYMP")[0].score, TITLE_WEIGHT);
    }

    #[test]
    fn token_matching_several_fields_counts_once() {
        let mut entry = record("Paris", &["paris"], 3);
        entry.subtitle = Some("Paris, FR".into());
        let catalog = vec![entry];
        assert_eq!(rank_scored(&catalog, "paris")[0].score, TITLE_WEIGHT);
    }

    #[test]
    fn zero_score_entries_are_dropped() {
        let catalog = scenario_catalog();
        assert!(rank(&catalog, "berlin").is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![nav("Shows A", &[]), nav("Shows B", &[])];
        assert_eq!(titles(&rank(&catalog, "shows")), vec!["Shows A", "Shows B"]);
    }

    #[test]
    fn equal_score_breaks_on_priority() {
        let catalog = vec![
            record("Lisbon", &[], 3),
            nav("Lisbon Travel", &[]),
            record("Lisbon Night", &[], 10),
        ];
        assert_eq!(titles(&rank(&catalog, "lisbon")), vec!["Lisbon Night", "Lisbon Travel", "Lisbon"]);
    }

    #[test]
    fn query_results_are_truncated() {
        let catalog: Vec<SearchableEntry> = (0..15).map(|i| record(&format!("Show {i}"), &[], 3)).collect();
        assert_eq!(rank(&catalog, "show").len(), QUERY_LIMIT);
    }

    #[test]
    fn duplicate_tokens_count_per_occurrence() {
        // Pinned: repeated tokens are not de-duplicated.
        let catalog = vec![record("Arena", &["madrid"], 3)];
        assert_eq!(rank_scored(&catalog, "madrid madrid")[0].score, 2 * KEYWORD_WEIGHT);
    }

    #[test]
    fn keywords_are_not_case_folded() {
        let catalog = vec![record("Arena", &["Madrid"], 3)];
        assert!(rank(&catalog, "madrid").is_empty());
    }

    #[test]
    fn empty_catalog_ranks_to_nothing() {
        assert!(rank(&[], "").is_empty());
        assert!(rank(&[], "paris").is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_entry() -> impl Strategy<Value = SearchableEntry> {
            ("[a-e]{1,6}", prop::collection::vec("[a-e]{1,4}", 0..3), -2i32..12, 0u8..3).prop_map(
                |(title, keywords, priority, kind)| {
                    let mut entry = match kind {
                        0 => nav(&title, &[]),
                        1 => record(&title, &[], priority),
                        _ => action(&title, priority),
                    };
                    entry.keywords = keywords;
                    entry
                },
            )
        }

        proptest! {
            #[test]
            fn empty_query_filter_order_and_limit(
                catalog in prop::collection::vec(arb_entry(), 0..20),
                ws in "[ \\t]{0,3}",
            ) {
                let results = rank(&catalog, &ws);
                prop_assert!(results.len() <= EMPTY_QUERY_LIMIT);
                for e in &results {
                    prop_assert!(e.kind.is_navigation() || e.priority >= SURFACE_PRIORITY);
                }
                for pair in results.windows(2) {
                    prop_assert!(pair[0].priority >= pair[1].priority);
                }
                let qualifying = catalog
                    .iter()
                    .filter(|e| e.kind.is_navigation() || e.priority >= SURFACE_PRIORITY)
                    .count();
                prop_assert_eq!(results.len(), qualifying.min(EMPTY_QUERY_LIMIT));
            }

            #[test]
            fn query_results_match_and_are_bounded(
                catalog in prop::collection::vec(arb_entry(), 0..30),
                query in "[a-e]{1,3}( [a-e]{1,2})?",
            ) {
                let tokens = tokenize(&query);
                let results = rank_scored(&catalog, &query);
                prop_assert!(results.len() <= QUERY_LIMIT);
                for r in &results {
                    prop_assert!(r.score > 0);
                    prop_assert_eq!(r.score, score_entry(r.entry, &tokens));
                }
                for pair in results.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(
                        a.score > b.score || (a.score == b.score && a.entry.priority >= b.entry.priority)
                    );
                }
                let matching = catalog.iter().filter(|e| score_entry(e, &tokens) > 0).count();
                prop_assert_eq!(results.len(), matching.min(QUERY_LIMIT));
            }
        }
    }
}
