use std::collections::HashSet;
use tokio::sync::Mutex;

use crate::core::error::ConfigError;
use crate::types::{Book, User};

/// Process-lifetime state: the catalog in seed order and the registered
/// users in registration order. Nothing here outlives the process.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) books: Mutex<Vec<Book>>,
    pub(crate) users: Mutex<Vec<User>>,
}

impl Store {
    pub(crate) fn new(books: Vec<Book>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();

        for book in &books {
            if !seen.insert(book.isbn.as_str()) {
                return Err(ConfigError::DuplicateIsbn(book.isbn.clone()));
            }
        }

        Ok(Self {
            books: Mutex::new(books),
            users: Mutex::new(Vec::new()),
        })
    }
}
