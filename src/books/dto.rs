use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::isbn::is_valid_isbn;

// BookDto is the wire form of a book record, shared by responses and the
// update merge path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, publisher: &str, published_date: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            published_date: published_date.to_string(),
            isbn: isbn.to_string(),
        }
    }

    // Shallow merge: fields present in the draft override, the rest keep
    // their current values. The result is re-validated before it persists.
    pub fn merge(&self, draft: &BookDraft) -> BookDraft {
        BookDraft {
            title: draft.title.clone().or_else(|| Some(self.title.clone())),
            author: draft.author.clone().or_else(|| Some(self.author.clone())),
            publisher: draft.publisher.clone().or_else(|| Some(self.publisher.clone())),
            published_date: draft.published_date.clone().or_else(|| Some(self.published_date.clone())),
            isbn: draft.isbn.clone().or_else(|| Some(self.isbn.clone())),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

// BookDraft is an all-optional candidate record: the create payload and the
// update patch both deserialize into it. Unknown payload keys are dropped.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub isbn: Option<String>,
}

impl BookDraft {
    // Field presence is checked first, isbn shape second; the complete record
    // comes back when both pass.
    pub fn validate(&self) -> LibraryResult<BookDto> {
        match (non_empty(&self.title), non_empty(&self.author), non_empty(&self.publisher),
               non_empty(&self.published_date), non_empty(&self.isbn)) {
            (Some(title), Some(author), Some(publisher), Some(published_date), Some(isbn)) => {
                if !is_valid_isbn(isbn) {
                    return Err(LibraryError::validation("Invalid ISBN format."));
                }
                Ok(BookDto::new(isbn, title, author, publisher, published_date))
            }
            _ => Err(LibraryError::validation(
                "All fields (title, author, publisher, publishedDate, and isbn) are required.")),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{BookDraft, BookDto};
    use crate::core::library::LibraryError;

    fn full_draft() -> BookDraft {
        BookDraft {
            title: Some("test book".to_string()),
            author: Some("test author".to_string()),
            publisher: Some("test publisher".to_string()),
            published_date: Some("1975-01-01".to_string()),
            isbn: Some("9780306406157".to_string()),
        }
    }

    #[tokio::test]
    async fn test_should_validate_full_draft() {
        let book = full_draft().validate().expect("should validate");
        assert_eq!("9780306406157", book.isbn.as_str());
        assert_eq!("test book", book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_missing_field() {
        let mut draft = full_draft();
        draft.author = None;
        let err = draft.validate().err().expect("should fail");
        assert_eq!("All fields (title, author, publisher, publishedDate, and isbn) are required.",
                   err.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_empty_field() {
        let mut draft = full_draft();
        draft.publisher = Some("".to_string());
        assert!(matches!(draft.validate(), Err(LibraryError::Validation { message: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_bad_isbn() {
        let mut draft = full_draft();
        draft.isbn = Some("1234".to_string());
        let err = draft.validate().err().expect("should fail");
        assert_eq!("Invalid ISBN format.", err.to_string());
    }

    #[tokio::test]
    async fn test_should_merge_partial_draft() {
        let book = BookDto::new("9780306406157", "old title", "author", "publisher", "1975");
        let patch = BookDraft {
            title: Some("new title".to_string()),
            ..BookDraft::default()
        };
        let merged = book.merge(&patch).validate().expect("should validate");
        assert_eq!("new title", merged.title.as_str());
        assert_eq!("author", merged.author.as_str());
        assert_eq!("9780306406157", merged.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_ignore_unknown_payload_keys() {
        let draft: BookDraft = serde_json::from_str(
            r#"{"title": "t", "shelf": "A3"}"#).expect("should parse");
        assert_eq!(Some("t"), draft.title.as_deref());
    }
}
