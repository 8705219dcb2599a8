//! Domain types for Bookshelf
//!
//! This module contains all domain models organized by responsibility:
//! - `book`: Book record, read status and the edit update value
//! - `search`: Search field selector
//! - `stats`: Reading statistics
//! - `common`: Shared input helpers

mod book;
mod common;
mod search;
mod stats;

// Re-export all public types
pub use book::{Book, BookUpdate, ReadStatus};
pub use common::parse_yes;
pub use search::SearchField;
pub use stats::ReadingStats;
