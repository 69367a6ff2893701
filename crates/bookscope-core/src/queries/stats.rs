//! Numeric aggregation over a book catalog.

use std::collections::HashSet;

use crate::error::{BookscopeError, Result};
use crate::models::Book;

/// Sum of all prices. An empty catalog sums to 0.0.
pub fn total_price(books: &[Book]) -> f64 {
    books.iter().map(|b| b.price).sum()
}

/// Arithmetic mean of all prices.
///
/// Errors on an empty catalog: there is no average to report.
pub fn average_price(books: &[Book]) -> Result<f64> {
    if books.is_empty() {
        return Err(BookscopeError::EmptyCatalog("average price"));
    }
    Ok(total_price(books) / books.len() as f64)
}

/// Number of distinct author strings (exact equality).
pub fn unique_author_count(books: &[Book]) -> usize {
    books
        .iter()
        .map(|b| b.author.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// The cheapest book in the catalog, or `None` if it is empty.
///
/// `Iterator::min_by` keeps the last minimum on ties; ties here must keep
/// the first, so the scan is written out as a fold.
pub fn cheapest(books: &[Book]) -> Option<Book> {
    books
        .iter()
        .fold(None, |best: Option<&Book>, book| match best {
            Some(current) if current.price <= book.price => Some(current),
            _ => Some(book),
        })
        .cloned()
}
