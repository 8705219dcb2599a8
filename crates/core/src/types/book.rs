//! Book record and edit update models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one entry in the personal library
///
/// All descriptive fields are free text. `year` is kept as typed and never
/// parsed, so "c. 1600" and "" are as valid as "1965".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Creates a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Returns the read status used for display
    pub fn status(&self) -> ReadStatus {
        if self.read {
            ReadStatus::Read
        } else {
            ReadStatus::Unread
        }
    }

    /// Returns true if `title` names this book, ignoring case
    ///
    /// This is the identity used by remove and edit lookups.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Applies an edit, keeping every field the update leaves unset
    ///
    /// The read flag is always overwritten.
    pub fn apply(&mut self, update: BookUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        self.read = update.read;
    }

    /// Formats the numbered line used by the list and search views
    pub fn summary_line(&self, position: usize) -> String {
        format!("{}. {}", position, self)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} [{}]",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status()
        )
    }
}

/// Whether a book has been finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStatus::Read => write!(f, "Read"),
            ReadStatus::Unread => write!(f, "Unread"),
        }
    }
}

/// Field-level changes for an existing book
///
/// `None` keeps the current value, `Some` replaces it. There is no "keep"
/// for `read`: the edit dialogue always asks and always applies the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl BookUpdate {
    /// Builds an update from raw prompt answers
    ///
    /// An empty answer means "keep". Whitespace is not trimmed, so a line
    /// containing only spaces replaces the field.
    pub fn from_input(
        title: String,
        author: String,
        year: String,
        genre: String,
        read: bool,
    ) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            year: non_empty(year),
            genre: non_empty(genre),
            read,
        }
    }

    /// Returns true if no descriptive field would change
    pub fn is_read_only(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none() && self.genre.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
