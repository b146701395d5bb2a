use std::fs;

use crate::core::error::ConfigError;
use crate::types::Book;

pub(crate) fn default_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "Things Fall Apart", "Chinua Achebe"),
        Book::new("2", "Fairy tales", "Hans Christian Andersen"),
        Book::new("3", "The Divine Comedy", "Dante Alighieri"),
        Book::new("4", "The Epic Of Gilgamesh", "Unknown"),
        Book::new("5", "The Book Of Job", "Unknown"),
        Book::new("6", "One Thousand and One Nights", "Unknown"),
        Book::new("7", "Nj\u{e1}l's Saga", "Unknown"),
        Book::new("8", "Pride and Prejudice", "Jane Austen"),
        Book::new("9", "Le P\u{e8}re Goriot", "Honor\u{e9} de Balzac"),
        Book::new(
            "10",
            "Molloy, Malone Dies, The Unnamable, the trilogy",
            "Samuel Beckett",
        ),
    ]
}

/// Reads a JSON array of books, or falls back to the built-in catalog.
pub(crate) fn load_catalog(path: Option<&str>) -> Result<Vec<Book>, ConfigError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            let books: Vec<Book> = serde_json::from_str(&raw)?;
            tracing::info!("loaded {} books from {}", books.len(), path);
            Ok(books)
        }
        None => Ok(default_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_no_reviews() {
        let books = default_catalog();

        assert_eq!(books.len(), 10);
        assert_eq!(books[0].isbn, "1");
        assert!(books.iter().all(|book| book.reviews.is_none()));
    }

    #[test]
    fn test_parse_seed_file_contents() {
        let raw = r#"[
            {"isbn": "1", "title": "T1", "author": "A1"},
            {"isbn": "2", "title": "T2", "author": "A2", "reviews": {"bob": "fine"}}
        ]"#;

        let books: Vec<Book> = serde_json::from_str(raw).unwrap();

        assert_eq!(books[0], Book::new("1", "T1", "A1"));
        assert_eq!(
            books[1].reviews.as_ref().and_then(|r| r.get("bob")).map(String::as_str),
            Some("fine")
        );
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        assert!(matches!(
            load_catalog(Some("/nonexistent/bookstore-seed.json")),
            Err(ConfigError::IO(_))
        ));
    }
}
