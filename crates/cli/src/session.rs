//! Interactive menu loop

use crate::commands;
use crate::error::{SessionError, SessionResult};
use crate::menu::MenuChoice;
use crate::prompt::Prompter;
use bookshelf_library::BookStore;
use console::style;
use log::{debug, info};
use std::io::{BufRead, Write};

/// One interactive session over a book store
///
/// The session sits in a single "awaiting menu choice" state. Every choice
/// except Exit runs its dialogue to completion and comes back here.
pub struct Session<'a, R, W> {
    io: Prompter<R, W>,
    store: &'a mut BookStore,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut BookStore, input: R, output: W) -> Self {
        Self {
            io: Prompter::new(input, output),
            store,
        }
    }

    /// Runs the menu loop until Exit is chosen or input ends
    ///
    /// End of input finishes the session normally. Save and terminal
    /// failures are returned.
    pub fn run(&mut self) -> SessionResult<()> {
        match self.menu_loop() {
            Err(SessionError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    /// Consumes the session and returns the writer
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn menu_loop(&mut self) -> SessionResult<()> {
        loop {
            self.print_menu()?;
            let answer = self.io.prompt("Choose an option (1-7): ")?;

            match MenuChoice::parse(&answer) {
                Ok(MenuChoice::Exit) => {
                    self.io.notice(style("Goodbye! Happy reading!").bold())?;
                    return Ok(());
                }
                Ok(choice) => {
                    debug!("Menu choice: {:?}", choice);
                    self.dispatch(choice)?;
                }
                Err(e) => {
                    debug!("{}", e);
                    self.io.notice(style(e.user_message()).red())?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> SessionResult<()> {
        match choice {
            MenuChoice::Add => commands::add_book(&mut self.io, self.store),
            MenuChoice::Remove => commands::remove_book(&mut self.io, self.store),
            MenuChoice::Search => commands::search_books(&mut self.io, self.store),
            MenuChoice::Edit => commands::edit_book(&mut self.io, self.store),
            MenuChoice::List => commands::list_books(&mut self.io, self.store),
            MenuChoice::Statistics => commands::show_statistics(&mut self.io, self.store),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> SessionResult<()> {
        self.io.say(
            style("=== Welcome to My Personal Library! ===")
                .bold()
                .cyan(),
        )?;
        for choice in MenuChoice::ALL {
            self.io.say(format!("{}. {}", choice.key(), choice.label()))?;
        }
        Ok(())
    }
}
