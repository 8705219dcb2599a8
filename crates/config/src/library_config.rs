//! Library data file configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the library data file
pub const DEFAULT_DATA_FILE: &str = "my_books.json";

/// Where the book collection is stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    /// Library data file; relative paths resolve against the working directory
    pub data_file: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ConfigSection for LibraryConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = vec![Validator::not_empty(
            &self.data_file.to_string_lossy(),
            "library.data_file",
        )];

        Validator::collect_errors(results)
    }
}
