pub mod json_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // snapshot of the whole collection, in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;
}
