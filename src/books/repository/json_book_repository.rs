use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the canonical collection in memory and mirrors it
// to a pretty-printed JSON document. Mutations hold the write guard across
// the duplicate check, the in-memory change and the disk write, so concurrent
// requests observe either the previous or the next consistent state. A failed
// write rolls the in-memory change back.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
    books: RwLock<Vec<BookEntity>>,
}

impl JsonBookRepository {
    // Loads the backing document eagerly. A missing file is seeded with an
    // empty collection; an unreadable or unparsable file is an error the
    // caller treats as fatal.
    pub(crate) async fn open(path: &Path) -> LibraryResult<Self> {
        let books = match tokio::fs::read(path).await {
            Ok(bytes) if bytes.is_empty() => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let books = Vec::new();
                write_document(path, &books).await?;
                books
            }
            Err(err) => {
                return Err(LibraryError::database(
                    format!("failed to read {}: {}", path.display(), err).as_str()));
            }
        };
        info!("loaded {} books from {}", books.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            books: RwLock::new(books),
        })
    }

    async fn persist(&self, books: &[BookEntity]) -> LibraryResult<()> {
        write_document(&self.path, books).await
    }
}

// Serializes the whole collection and renames a temp file over the document,
// so a crash mid-write never leaves a torn file behind.
async fn write_document(path: &Path, books: &[BookEntity]) -> LibraryResult<()> {
    let bytes = serde_json::to_vec_pretty(books)?;
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{}.tmp", ext));
    tokio::fs::write(&tmp, &bytes).await.map_err(|err| {
        LibraryError::database(format!("failed to write {}: {}", tmp.display(), err).as_str())
    })?;
    tokio::fs::rename(&tmp, path).await.map_err(|err| {
        LibraryError::database(format!("failed to replace {}: {}", path.display(), err).as_str())
    })
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|book| book.isbn == entity.isbn) {
            return Err(LibraryError::duplicate_key("Book with this ISBN already exists."));
        }
        books.push(entity.clone());
        match self.persist(&books).await {
            Ok(()) => Ok(1),
            Err(err) => {
                error!("create rolled back for {}: {}", entity.id(), err);
                books.pop();
                Err(err)
            }
        }
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|book| book.isbn == entity.isbn)
            .ok_or_else(|| LibraryError::not_found(
                format!("book not found for {}", entity.id()).as_str()))?;
        let previous = std::mem::replace(&mut books[index], entity.clone());
        match self.persist(&books).await {
            Ok(()) => Ok(1),
            Err(err) => {
                error!("update rolled back for {}: {}", entity.id(), err);
                books[index] = previous;
                Err(err)
            }
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.read().await.iter()
            .find(|book| book.isbn == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|book| book.isbn == id)
            .ok_or_else(|| LibraryError::not_found(
                format!("book not found for {}", id).as_str()))?;
        let removed = books.remove(index);
        match self.persist(&books).await {
            Ok(()) => Ok(1),
            Err(err) => {
                error!("delete rolled back for {}: {}", id, err);
                books.insert(index, removed);
                Err(err)
            }
        }
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}
