//! Library data file persistence
//!
//! The file holds a pretty-printed JSON array of book objects. It is read
//! whole and written whole; writes go through a temporary file in the same
//! directory and a rename, so readers see either the old list or the new one.

use crate::error::{LibraryError, LibraryResult};
use bookshelf_core::Book;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles reading and writing the library data file
#[derive(Debug, Clone)]
pub struct LibraryFile {
    path: PathBuf,
}

impl LibraryFile {
    /// Creates a handler for the given data file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read(&self) -> LibraryResult<Option<Vec<Book>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LibraryError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let books = serde_json::from_str(&contents).map_err(|e| LibraryError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(books))
    }

    /// Replaces the data file with `books`
    pub fn write(&self, books: &[Book]) -> LibraryResult<()> {
        let json = encode(books)?;

        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| LibraryError::DirectoryCreation {
                path: dir.clone(),
                source: e,
            })?;
            log::info!("Created library directory: {}", dir.display());
        }

        let mut temp_file = NamedTempFile::new_in(&dir)?;
        temp_file.write_all(&json)?;
        temp_file.flush()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| LibraryError::Write {
                path: self.path.clone(),
                source: e.error,
            })?;

        log::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Serializes the collection with four-space indentation
fn encode(books: &[Book]) -> LibraryResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut serializer)?;
    Ok(buf)
}
