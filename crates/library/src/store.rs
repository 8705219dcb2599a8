// FILE: crates/library/src/store.rs

use crate::error::LibraryResult;
use crate::persistence::LibraryFile;
use bookshelf_core::{Book, BookUpdate, ReadingStats, SearchField};
use log::{debug, error, info, warn};
use std::path::Path;

/// The personal book collection and its data file
///
/// Books keep insertion order. Titles are not unique; every title lookup
/// is a linear scan that stops at the first case-insensitive match.
#[derive(Debug)]
pub struct BookStore {
    file: LibraryFile,
    books: Vec<Book>,
}

impl BookStore {
    /// Opens the store and loads the collection from `path`
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self {
            file: LibraryFile::new(path.as_ref()),
            books: Vec::new(),
        };
        store.load();
        store
    }

    /// Replaces the in-memory collection with the data file contents
    ///
    /// A missing, unreadable or undecodable file leaves the collection empty.
    fn load(&mut self) {
        self.books = match self.file.read() {
            Ok(Some(books)) => {
                info!(
                    "Loaded {} books from {}",
                    books.len(),
                    self.file.path().display()
                );
                books
            }
            Ok(None) => {
                info!(
                    "Library file not found at {}, starting empty",
                    self.file.path().display()
                );
                Vec::new()
            }
            Err(e) if e.is_load_error() => {
                warn!("{}, starting with an empty library", e);
                Vec::new()
            }
            Err(e) => {
                error!("{}, starting with an empty library", e);
                Vec::new()
            }
        };
    }

    /// Writes the whole collection to the data file
    pub fn save(&self) -> LibraryResult<()> {
        self.file.write(&self.books)
    }

    /// Appends a book and saves
    pub fn add(&mut self, book: Book) -> LibraryResult<()> {
        debug!("Adding '{}'", book.title);
        self.books.push(book);
        self.save()
    }

    /// Removes the first book titled `title` (ignoring case)
    ///
    /// Saves only when a book was removed.
    pub fn remove(&mut self, title: &str) -> LibraryResult<Option<Book>> {
        let Some(index) = self.position(title) else {
            debug!("Remove: no book titled '{}'", title);
            return Ok(None);
        };

        let removed = self.books.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Returns the first book titled `title` (ignoring case)
    pub fn find(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.has_title(title))
    }

    /// Applies `update` to the first book titled `title` and saves
    ///
    /// Returns false, without saving, when no book matches.
    pub fn edit(&mut self, title: &str, update: BookUpdate) -> LibraryResult<bool> {
        let Some(index) = self.position(title) else {
            debug!("Edit: no book titled '{}'", title);
            return Ok(false);
        };

        if update.is_read_only() {
            debug!("Edit of '{}' only sets the read flag", title);
        }
        self.books[index].apply(update);
        self.save()?;
        Ok(true)
    }

    /// Returns the books whose `field` contains `keyword`, in collection order
    pub fn search(&self, field: SearchField, keyword: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| field.matches(b, keyword))
            .collect()
    }

    /// Returns every book in collection order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Counts total and finished books
    pub fn statistics(&self) -> ReadingStats {
        ReadingStats::from_books(&self.books)
    }

    /// Returns the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the library holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the library data file path
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.has_title(title))
    }
}
