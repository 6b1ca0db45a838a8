use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) draft: BookDraft,
}

impl AddBookCommandRequest {
    pub fn new(draft: BookDraft) -> Self {
        Self {
            draft,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: "Book added successfully".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.draft).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tempfile::tempdir;

    use crate::books::dto::BookDraft;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn full_draft(isbn: &str) -> BookDraft {
        BookDraft {
            title: Some("test book".to_string()),
            author: Some("test author".to_string()),
            publisher: Some("test publisher".to_string()),
            published_date: Some("1975-01-01".to_string()),
            isbn: Some(isbn.to_string()),
        }
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let dir = tempdir().expect("should create temp dir");
        let config = Configuration::new(0, &dir.path().join("Books.json"));
        let svc = factory::create_catalog_service(&config).await.expect("should open store");
        let cmd = AddBookCommand::new(Arc::from(svc));

        let res = cmd.execute(AddBookCommandRequest::new(full_draft("9780306406157")))
            .await.expect("should add book");
        assert_eq!("Book added successfully", res.message.as_str());
        assert_eq!("9780306406157", res.book.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_add_book_for_duplicate_isbn() {
        let dir = tempdir().expect("should create temp dir");
        let config = Configuration::new(0, &dir.path().join("Books.json"));
        let svc = factory::create_catalog_service(&config).await.expect("should open store");
        let cmd = AddBookCommand::new(Arc::from(svc));

        let _ = cmd.execute(AddBookCommandRequest::new(full_draft("9780306406157")))
            .await.expect("should add book");
        let err = cmd.execute(AddBookCommandRequest::new(full_draft("9780306406157")))
            .await.err().expect("should fail");
        assert!(matches!(err, CommandError::DuplicateKey { message: _ }));
    }
}
