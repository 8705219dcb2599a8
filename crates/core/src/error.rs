//! Error types for Bookshelf domain input
//!
//! These errors describe user input that does not map onto a domain value,
//! such as a menu choice outside 1-7 or a search selector other than 1 or 2.
//! None of them is fatal: the caller prints [`AppError::user_message`] and
//! returns to the menu.

use thiserror::Error;

/// Main error type for Bookshelf domain parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Top-level menu choice is not one of the listed options
    #[error("Invalid menu choice: '{choice}'")]
    InvalidMenuChoice { choice: String },

    /// Search field selector is neither "1" (title) nor "2" (author)
    #[error("Invalid search field selector: '{selector}'")]
    InvalidSearchField { selector: String },
}

impl AppError {
    /// Returns the message shown to the user at the prompt
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidMenuChoice { .. } => {
                "Invalid choice! Please select a valid option.".to_string()
            }
            Self::InvalidSearchField { .. } => "Invalid choice! Please enter 1 or 2.".to_string(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
