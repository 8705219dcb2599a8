//! Search field selection

use crate::error::{AppError, Result};
use crate::types::Book;

/// Which book field a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Parses the menu selector: "1" for title, "2" for author
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector.trim() {
            "1" => Ok(Self::Title),
            "2" => Ok(Self::Author),
            other => Err(AppError::InvalidSearchField {
                selector: other.to_string(),
            }),
        }
    }

    /// Returns the searched value of `book`
    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
        }
    }

    /// Case-insensitive substring match; an empty keyword matches every book
    pub fn matches(&self, book: &Book, keyword: &str) -> bool {
        self.value_of(book)
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
