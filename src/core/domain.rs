use std::path::{Path, PathBuf};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts runtime options for the book service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub port: u16,
    pub books_file: PathBuf,
}

impl Configuration {
    pub fn new(port: u16, books_file: &Path) -> Self {
        Configuration {
            port,
            books_file: books_file.to_path_buf(),
        }
    }

    // PORT and BOOKS_FILE are the only external inputs.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);
        let books_file = std::env::var("BOOKS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("Books.json"));
        Configuration { port, books_file }
    }
}
