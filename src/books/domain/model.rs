use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is the persistent form of one book record. The isbn acts as the
// unique identifier; the backing document stores camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, publisher: &str, published_date: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            published_date: published_date.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
