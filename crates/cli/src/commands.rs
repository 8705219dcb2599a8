// FILE: crates/cli/src/commands.rs

use crate::error::SessionResult;
use crate::prompt::Prompter;
use bookshelf_core::{Book, BookUpdate, SearchField};
use bookshelf_library::BookStore;
use console::style;
use log::info;
use std::io::{BufRead, Write};

const READ_QUESTION: &str = "Have you read this book? (yes/no): ";

/// Add a new book to the library
pub fn add_book<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &mut BookStore,
) -> SessionResult<()> {
    let title = io.prompt("Book Title: ")?;
    let author = io.prompt("Author: ")?;
    let year = io.prompt("Publication Year: ")?;
    let genre = io.prompt("Genre: ")?;
    let read = io.confirm(READ_QUESTION)?;

    store.add(Book::new(title, author, year, genre, read))?;
    info!("Library now holds {} books", store.len());

    io.notice(style("Your new book has been added!").green())
}

/// Remove a book by title
pub fn remove_book<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &mut BookStore,
) -> SessionResult<()> {
    let title = io.prompt("Enter the title of the book to remove: ")?;

    match store.remove(&title)? {
        Some(book) => {
            info!("Removed '{}' by {}", book.title, book.author);
            io.notice(style("Book removed successfully!").green())
        }
        None => io.notice(style("Oops! That book wasn't found in your library.").yellow()),
    }
}

/// Search by title or author
pub fn search_books<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &BookStore,
) -> SessionResult<()> {
    io.say("Search by:\n1. Title\n2. Author")?;
    let selector = io.prompt("Enter your choice (1 or 2): ")?;

    let field = match SearchField::from_selector(&selector) {
        Ok(field) => field,
        Err(e) => return io.notice(style(e.user_message()).red()),
    };

    let keyword = io.prompt("Enter your search keyword: ")?;
    let results = store.search(field, keyword.trim());

    if results.is_empty() {
        return io.notice(style("No matching books found.").yellow());
    }

    io.say(format!("\n{}", style("Here are your matching books:").bold().cyan()))?;
    print_numbered(io, results)
}

/// Edit the details of a book
pub fn edit_book<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &mut BookStore,
) -> SessionResult<()> {
    let title = io.prompt("Enter the title of the book you wish to update: ")?;

    let Some(current) = store.find(&title).cloned() else {
        return io.notice(style("Book not found in your collection.").yellow());
    };

    io.say("Press Enter to keep the current value.")?;
    let new_title = io.prompt(&format!("New title ({}): ", current.title))?;
    let new_author = io.prompt(&format!("New author ({}): ", current.author))?;
    let new_year = io.prompt(&format!("New publication year ({}): ", current.year))?;
    let new_genre = io.prompt(&format!("New genre ({}): ", current.genre))?;
    let read = io.confirm(READ_QUESTION)?;

    let update = BookUpdate::from_input(new_title, new_author, new_year, new_genre, read);
    if store.edit(&title, update)? {
        io.notice(style("Book details updated successfully!").green())
    } else {
        io.notice(style("Book not found in your collection.").yellow())
    }
}

/// List every book in the library
pub fn list_books<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &BookStore,
) -> SessionResult<()> {
    if store.is_empty() {
        return io.notice(style("Your library is currently empty.").yellow());
    }

    io.say(format!("\n{}", style("Your Personal Library:").bold().cyan()))?;
    print_numbered(io, store.all())
}

/// Show reading statistics
pub fn show_statistics<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    store: &BookStore,
) -> SessionResult<()> {
    let stats = store.statistics();

    io.blank()?;
    io.say(format!("Total books: {}", stats.total))?;
    io.say(format!("Books read: {}", stats.read))?;
    io.say(format!("Completion: {:.2}%", stats.completion_percentage()))?;
    io.blank()
}

fn print_numbered<'a, R, W, I>(io: &mut Prompter<R, W>, books: I) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = &'a Book>,
{
    for (i, book) in books.into_iter().enumerate() {
        io.say(book.summary_line(i + 1))?;
    }
    io.blank()
}
