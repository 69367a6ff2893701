use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Prices are plain `f64` values; review text is kept verbatim. Titles are
/// not required to be unique across a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    /// By catalog convention this starts with "Автор", but nothing enforces it.
    pub author: String,

    pub price: f64,

    #[serde(default)]
    pub reviews: Vec<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            reviews: Vec::new(),
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<String>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Whether at least one review has been left for this book.
    pub fn is_reviewed(&self) -> bool {
        !self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new() {
        let book = Book::new("Война и мир", "Автор Толстой", 350.0);
        assert_eq!(book.title, "Война и мир");
        assert_eq!(book.author, "Автор Толстой");
        assert_eq!(book.price, 350.0);
        assert!(book.reviews.is_empty());
        assert!(!book.is_reviewed());
    }

    #[test]
    fn test_book_with_reviews() {
        let book = Book::new("Тест", "Автор Тестов", 10.0)
            .with_reviews(vec!["отлично".to_string(), "рекомендую".to_string()]);
        assert_eq!(book.reviews.len(), 2);
        assert!(book.is_reviewed());
    }

    #[test]
    fn test_book_json_roundtrip() {
        let book = Book::new("Sky", "Автор Иванов", 120.0)
            .with_reviews(vec!["неплохо".to_string()]);

        let json = serde_json::to_string_pretty(&book).unwrap();
        let restored: Book = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, book);
    }

    #[test]
    fn test_book_json_missing_reviews_defaults_empty() {
        let json = r#"{"title": "Sky", "author": "Автор Иванов", "price": 120.0}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.reviews.is_empty());
    }
}
