//! Top-level menu choices

use bookshelf_core::{AppError, Result};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    Edit,
    List,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Edit,
        MenuChoice::List,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parses a menu answer; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::Search),
            "4" => Ok(Self::Edit),
            "5" => Ok(Self::List),
            "6" => Ok(Self::Statistics),
            "7" => Ok(Self::Exit),
            other => Err(AppError::InvalidMenuChoice {
                choice: other.to_string(),
            }),
        }
    }

    /// Number the user types for this choice
    pub fn key(&self) -> usize {
        match self {
            Self::Add => 1,
            Self::Remove => 2,
            Self::Search => 3,
            Self::Edit => 4,
            Self::List => 5,
            Self::Statistics => 6,
            Self::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add a new book",
            Self::Remove => "Remove a book",
            Self::Search => "Search for a book",
            Self::Edit => "Edit book details",
            Self::List => "View all books",
            Self::Statistics => "View reading statistics",
            Self::Exit => "Exit",
        }
    }
}
