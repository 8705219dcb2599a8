//! Reading statistics

use crate::types::Book;

/// Collection-wide reading progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStats {
    pub total: usize,
    pub read: usize,
}

impl ReadingStats {
    /// Counts the given books
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            total: books.len(),
            read: books.iter().filter(|b| b.read).count(),
        }
    }

    /// Returns the percentage of finished books, 0 for an empty library
    pub fn completion_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.read as f64 / self.total as f64) * 100.0
    }
}
