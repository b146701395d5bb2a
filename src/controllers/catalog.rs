use std::sync::Arc;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::{Book, Reviews};

/// What an author or title search answers when nothing matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyResultPolicy {
    /// Respond 404, as the original service did.
    NotFound,
    EmptyList,
}

impl From<bool> for EmptyResultPolicy {
    fn from(empty_is_error: bool) -> Self {
        if empty_is_error {
            EmptyResultPolicy::NotFound
        } else {
            EmptyResultPolicy::EmptyList
        }
    }
}

/// Public, read-only queries over the catalog.
#[derive(Clone, Debug)]
pub(crate) struct CatalogController {
    store: Arc<Store>,
    empty_results: EmptyResultPolicy,
}

impl CatalogController {
    pub(crate) fn new(store: Arc<Store>, empty_results: EmptyResultPolicy) -> Self {
        Self {
            store,
            empty_results,
        }
    }

    pub(crate) async fn list_all(&self) -> Vec<Book> {
        self.store.books.lock().await.clone()
    }

    pub(crate) async fn get_by_isbn(&self, isbn: &str) -> Result<Book, Error> {
        self.store
            .books
            .lock()
            .await
            .iter()
            .find(|book| book.isbn == isbn)
            .cloned()
            .ok_or(Error::BookNotFound)
    }

    pub(crate) async fn get_by_author(&self, author: &str) -> Result<Vec<Book>, Error> {
        self.filter(|book| book.author == author, "No books found for this author")
            .await
    }

    pub(crate) async fn get_by_title(&self, title: &str) -> Result<Vec<Book>, Error> {
        self.filter(|book| book.title == title, "No books found with this title")
            .await
    }

    /// Fails with `BookNotFound` for an unknown ISBN and `NoReviews` for a
    /// book nobody has reviewed yet.
    pub(crate) async fn get_reviews(&self, isbn: &str) -> Result<Reviews, Error> {
        let books = self.store.books.lock().await;
        let book = books
            .iter()
            .find(|book| book.isbn == isbn)
            .ok_or(Error::BookNotFound)?;

        book.reviews.clone().ok_or(Error::NoReviews)
    }

    async fn filter<F>(&self, predicate: F, empty_message: &'static str) -> Result<Vec<Book>, Error>
    where
        F: Fn(&Book) -> bool,
    {
        let matches: Vec<Book> = self
            .store
            .books
            .lock()
            .await
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect();

        match (matches.is_empty(), self.empty_results) {
            (true, EmptyResultPolicy::NotFound) => Err(Error::NoMatches(empty_message)),
            _ => Ok(matches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(policy: EmptyResultPolicy) -> CatalogController {
        let store = Store::new(vec![
            Book::new("1", "T1", "A1"),
            Book::new("2", "T2", "A2"),
            Book::new("3", "T3", "A1"),
        ])
        .unwrap();

        CatalogController::new(Arc::new(store), policy)
    }

    #[tokio::test]
    async fn test_list_all_keeps_seed_order() {
        let isbns: Vec<String> = controller(EmptyResultPolicy::NotFound)
            .list_all()
            .await
            .into_iter()
            .map(|book| book.isbn)
            .collect();

        assert_eq!(isbns, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_get_by_isbn() {
        let catalog = controller(EmptyResultPolicy::NotFound);

        assert_eq!(catalog.get_by_isbn("2").await.unwrap().title, "T2");
        assert!(matches!(catalog.get_by_isbn("42").await, Err(Error::BookNotFound)));
    }

    #[tokio::test]
    async fn test_author_and_title_are_exact_match() {
        let catalog = controller(EmptyResultPolicy::NotFound);

        let by_author = catalog.get_by_author("A1").await.unwrap();
        assert_eq!(by_author.len(), 2);
        assert_eq!(by_author[1].isbn, "3");

        assert_eq!(catalog.get_by_title("T2").await.unwrap().len(), 1);
        assert!(matches!(catalog.get_by_title("t2").await, Err(Error::NoMatches(_))));
        assert!(matches!(catalog.get_by_author("A").await, Err(Error::NoMatches(_))));
    }

    #[tokio::test]
    async fn test_empty_list_policy() {
        let catalog = controller(EmptyResultPolicy::EmptyList);

        assert!(catalog.get_by_author("nobody").await.unwrap().is_empty());
        assert!(catalog.get_by_title("nothing").await.unwrap().is_empty());
        // Absence of a single book is unaffected by the search policy.
        assert!(matches!(catalog.get_by_isbn("42").await, Err(Error::BookNotFound)));
    }

    #[tokio::test]
    async fn test_reviews_absent_until_written() {
        let catalog = controller(EmptyResultPolicy::NotFound);

        assert!(matches!(catalog.get_reviews("1").await, Err(Error::NoReviews)));
        assert!(matches!(catalog.get_reviews("42").await, Err(Error::BookNotFound)));
    }
}
