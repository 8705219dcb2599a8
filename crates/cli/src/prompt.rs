//! Line-based prompting over any reader/writer pair

use crate::error::{SessionError, SessionResult};
use bookshelf_core::parse_yes;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Text I/O for the session: prompts on `output`, answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line without its line terminator
    ///
    /// Fails with `SessionError::InputClosed` at end of input.
    pub fn prompt(&mut self, label: &str) -> SessionResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Asks a yes/no question; only "yes" counts as yes
    pub fn confirm(&mut self, label: &str) -> SessionResult<bool> {
        Ok(parse_yes(&self.prompt(label)?))
    }

    /// Writes one line
    pub fn say(&mut self, text: impl Display) -> SessionResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a message framed by blank lines
    pub fn notice(&mut self, text: impl Display) -> SessionResult<()> {
        writeln!(self.output, "\n{}\n", text)?;
        Ok(())
    }

    /// Writes an empty line
    pub fn blank(&mut self) -> SessionResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Consumes the prompter and returns the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
