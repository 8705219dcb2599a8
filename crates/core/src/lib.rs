//! Domain types for Bookshelf
//!
//! Everything here is plain data: the book record, the optional-update
//! value used by the edit dialogue, search selectors and reading statistics.
//! Persistence lives in `bookshelf-library`, prompting in `bookshelf-cli`.

pub mod error;
pub mod types;

pub use error::{AppError, Result};
pub use types::{parse_yes, Book, BookUpdate, ReadStatus, ReadingStats, SearchField};
