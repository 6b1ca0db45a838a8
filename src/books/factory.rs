use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    let repository = JsonBookRepository::open(config.books_file.as_path()).await?;
    Ok(Box::new(repository))
}
