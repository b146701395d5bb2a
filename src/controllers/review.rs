use std::sync::Arc;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::Reviews;

/// Writes and removes the single review each user may hold per book.
/// Callers pass a username already resolved from a verified token.
#[derive(Clone, Debug)]
pub(crate) struct ReviewController {
    store: Arc<Store>,
}

impl ReviewController {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Creates or overwrites `username`'s review and returns the book's
    /// full review map.
    pub(crate) async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        text: &str,
    ) -> Result<Reviews, Error> {
        let mut books = self.store.books.lock().await;
        let book = books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or(Error::BookNotFound)?;

        let reviews = book.reviews.get_or_insert_with(Reviews::new);
        reviews.insert(username.into(), text.into());

        tracing::debug!("{} reviewed {}", username, isbn);

        Ok(reviews.clone())
    }

    pub(crate) async fn delete_review(&self, isbn: &str, username: &str) -> Result<(), Error> {
        let mut books = self.store.books.lock().await;
        let book = books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or(Error::BookNotFound)?;

        // The emptied map stays so the book keeps answering with `{}`.
        book.reviews
            .as_mut()
            .and_then(|reviews| reviews.remove(username))
            .ok_or(Error::ReviewNotFound)?;

        tracing::debug!("{} removed review of {}", username, isbn);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::catalog::{CatalogController, EmptyResultPolicy};
    use crate::types::Book;

    fn controllers() -> (ReviewController, CatalogController) {
        let store = Arc::new(Store::new(vec![Book::new("1", "T1", "A1")]).unwrap());

        (
            ReviewController::new(store.clone()),
            CatalogController::new(store, EmptyResultPolicy::NotFound),
        )
    }

    #[tokio::test]
    async fn test_upsert_then_read_back() {
        let (reviews, catalog) = controllers();

        let map = reviews.upsert_review("1", "alice", "great book").await.unwrap();
        assert_eq!(map.get("alice").map(String::as_str), Some("great book"));

        let stored = catalog.get_reviews("1").await.unwrap();
        assert_eq!(stored, map);
    }

    #[tokio::test]
    async fn test_upsert_overwrites_and_is_idempotent() {
        let (reviews, catalog) = controllers();

        reviews.upsert_review("1", "alice", "ok").await.unwrap();
        reviews.upsert_review("1", "bob", "meh").await.unwrap();
        let once = reviews.upsert_review("1", "alice", "great").await.unwrap();
        let twice = reviews.upsert_review("1", "alice", "great").await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
        assert_eq!(catalog.get_reviews("1").await.unwrap()["alice"], "great");
    }

    #[tokio::test]
    async fn test_unknown_book() {
        let (reviews, _) = controllers();

        assert!(matches!(
            reviews.upsert_review("42", "alice", "text").await,
            Err(Error::BookNotFound)
        ));
        assert!(matches!(
            reviews.delete_review("42", "alice").await,
            Err(Error::BookNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_leaves_empty_map() {
        let (reviews, catalog) = controllers();

        reviews.upsert_review("1", "alice", "great book").await.unwrap();
        reviews.delete_review("1", "alice").await.unwrap();

        assert!(catalog.get_reviews("1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_review() {
        let (reviews, _) = controllers();

        assert!(matches!(
            reviews.delete_review("1", "alice").await,
            Err(Error::ReviewNotFound)
        ));

        reviews.upsert_review("1", "bob", "fine").await.unwrap();
        assert!(matches!(
            reviews.delete_review("1", "alice").await,
            Err(Error::ReviewNotFound)
        ));
    }
}
