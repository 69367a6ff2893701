//! Catalog-shaping queries: predicates, previews, partitions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::QueryConfig;
use crate::error::{BookscopeError, Result};
use crate::models::Book;

/// The two bands a catalog partitions into by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    /// Strictly under the configured threshold.
    #[serde(rename = "OK")]
    Ok,
    /// At or over the threshold.
    #[serde(rename = "Not Ok")]
    NotOk,
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotOk => write!(f, "Not Ok"),
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Self::Ok),
            "Not Ok" => Ok(Self::NotOk),
            _ => Err(format!("Invalid PriceBand: {s}")),
        }
    }
}

/// A catalog split into exactly two price bands.
///
/// Each band keeps its books in original relative order, so concatenating
/// `ok` and `not_ok` restores every input book exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePartition {
    #[serde(rename = "OK")]
    pub ok: Vec<Book>,

    #[serde(rename = "Not Ok")]
    pub not_ok: Vec<Book>,
}

impl PricePartition {
    pub fn band(&self, band: PriceBand) -> &[Book] {
        match band {
            PriceBand::Ok => &self.ok,
            PriceBand::NotOk => &self.not_ok,
        }
    }

    pub fn len(&self) -> usize {
        self.ok.len() + self.not_ok.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ok.is_empty() && self.not_ok.is_empty()
    }
}

/// True when every author field starts with the configured prefix.
///
/// An empty catalog passes vacuously.
pub fn all_authors_tagged(books: &[Book], config: &QueryConfig) -> bool {
    books
        .iter()
        .all(|b| b.author.starts_with(&config.author_prefix))
}

/// Titles of the first `preview_size` catalog entries, as a set.
///
/// Duplicate titles collapse, so the set may be smaller than the window.
pub fn title_preview(books: &[Book], config: &QueryConfig) -> HashSet<String> {
    books
        .iter()
        .take(config.preview_size)
        .map(|b| b.title.clone())
        .collect()
}

/// Books whose title ends in an even decimal digit, priced under the bargain cap.
///
/// The last character of every title is inspected before any price filtering,
/// so a single untitled book fails the whole query. A non-digit last
/// character just excludes the book.
pub fn cheap_even_numbered(books: &[Book], config: &QueryConfig) -> Result<Vec<Book>> {
    let mut out = Vec::new();
    for book in books {
        let last = book
            .title
            .chars()
            .last()
            .ok_or_else(|| BookscopeError::UntitledBook(book.author.clone()))?;
        let even = last.to_digit(10).map(|d| d % 2 == 0).unwrap_or(false);
        if even && book.price < config.bargain_cap {
            out.push(book.clone());
        }
    }
    Ok(out)
}

/// Split the catalog into the two price bands, preserving relative order.
pub fn partition_by_price(books: &[Book], config: &QueryConfig) -> PricePartition {
    let (ok, not_ok): (Vec<Book>, Vec<Book>) = books
        .iter()
        .cloned()
        .partition(|b| b.price < config.price_threshold);
    debug!(ok = ok.len(), not_ok = not_ok.len(), "partitioned catalog by price");
    PricePartition { ok, not_ok }
}
