//! Error types for the interactive session

use bookshelf_library::LibraryError;
use thiserror::Error;

/// Errors that end an interactive session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,

    /// Reading a prompt answer or writing output failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Saving the library failed
    #[error(transparent)]
    Library(#[from] LibraryError),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
