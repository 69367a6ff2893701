//! Review-centric queries.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::QueryConfig;
use crate::models::Book;

/// Map each title to that book's reviews.
///
/// Titles are not unique; on collision the later entry's reviews replace the
/// earlier one's (last write wins).
pub fn reviews_by_title(books: &[Book]) -> HashMap<String, Vec<String>> {
    books
        .iter()
        .map(|b| (b.title.clone(), b.reviews.clone()))
        .collect()
}

/// Like [`reviews_by_title`], restricted to books that have reviews.
pub fn reviews_by_title_nonempty(books: &[Book]) -> HashMap<String, Vec<String>> {
    books
        .iter()
        .filter(|b| b.is_reviewed())
        .map(|b| (b.title.clone(), b.reviews.clone()))
        .collect()
}

/// Every review across the catalog, deduplicated, in first-appearance order.
pub fn distinct_reviews(books: &[Book]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for review in books.iter().flat_map(|b| b.reviews.iter()) {
        if seen.insert(review.as_str()) {
            out.push(review.clone());
        }
    }
    out
}

/// Books with at least one review mentioning the recommendation keyword.
///
/// Both sides are lowercased with `str::to_lowercase` (Unicode case mapping,
/// no locale), so "Рекомендую!" matches.
pub fn recommended(books: &[Book], config: &QueryConfig) -> Vec<Book> {
    let keyword = config.recommend_keyword.to_lowercase();
    let hits: Vec<Book> = books
        .iter()
        .filter(|b| b.reviews.iter().any(|r| r.to_lowercase().contains(&keyword)))
        .cloned()
        .collect();
    debug!(total = books.len(), hits = hits.len(), "recommendation scan");
    hits
}
