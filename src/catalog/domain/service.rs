use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDraft, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|book| BookDto::from(&book))
    }

    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = draft.validate()?;
        let _ = self.book_repository.create(&BookEntity::from(&book)).await?;
        Ok(book)
    }

    // The record is looked up first (absent target is a not-found, matching
    // the delete path), then the patch is merged shallowly and the merged
    // result re-validated. The isbn is immutable once created.
    async fn update_book(&self, isbn: &str, patch: &BookDraft) -> LibraryResult<BookDto> {
        let existing = self.book_repository.get(isbn).await?;
        if patch.isbn.as_deref().map_or(false, |other| other != isbn) {
            return Err(LibraryError::validation("ISBN cannot be changed."));
        }
        let merged = BookDto::from(&existing).merge(patch).validate()?;
        let _ = self.book_repository.update(&BookEntity::from(&merged)).await?;
        Ok(merged)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        self.book_repository.delete(isbn).await.map(|_| ())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            published_date: other.published_date.to_string(),
            isbn: other.isbn.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            published_date: other.published_date.to_string(),
            isbn: other.isbn.to_string(),
        }
    }
}
