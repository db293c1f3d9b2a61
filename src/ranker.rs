use crate::matcher::FuzzyMatcher;
use crate::model::{CatalogEntry, ScoredEntry};

const TITLE_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 2;
const KEYWORD_WEIGHT: u32 = 2;

pub fn score_entry<'a>(matcher: &FuzzyMatcher, query: &str, entry: &'a CatalogEntry) -> ScoredEntry<'a> {
    let keyword_score: u32 = entry.keywords.iter().map(|k| matcher.score(query, k)).sum();
    let score = TITLE_WEIGHT * matcher.score(query, &entry.title)
        + DESCRIPTION_WEIGHT * matcher.score(query, &entry.description)
        + KEYWORD_WEIGHT * keyword_score;
    ScoredEntry { entry, score }
}

/// Ranks the catalog against `query`. A blank query returns the catalog as is.
/// Equal scores keep their catalog order.
pub fn rank(matcher: &FuzzyMatcher, query: &str, catalog: &[CatalogEntry]) -> Vec<CatalogEntry> {
    if query.trim().is_empty() {
        return catalog.to_vec();
    }

    let mut scored: Vec<ScoredEntry> = catalog
        .iter()
        .map(|entry| score_entry(matcher, query, entry))
        .filter(|s| s.score > 0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored.into_iter().map(|s| s.entry.clone()).collect()
}
