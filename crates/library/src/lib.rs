//! Bookshelf Library Store
//!
//! Owns the in-memory book collection and keeps it in sync with the
//! library data file. The collection is loaded once when the store is
//! opened and written back in full after every mutation.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{LibraryError, LibraryResult};
pub use persistence::LibraryFile;
pub use store::BookStore;
