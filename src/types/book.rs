use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Username;

pub(crate) type Isbn = String;

pub(crate) type Reviews = BTreeMap<Username, String>;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub(crate) struct Book {
    pub(crate) isbn: Isbn,
    pub(crate) title: String,
    pub(crate) author: String,
    // Absent until the first review is written for this book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) reviews: Option<Reviews>,
}

impl Book {
    pub(crate) fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: None,
        }
    }
}
