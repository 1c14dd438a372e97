//! Interactive read-dispatch-print loop.
//!
//! A [`Session`] owns the address book for the lifetime of one run. It loads
//! the book through an [`AddressBookRepository`] when it starts and saves it
//! back when the user leaves with `close`/`exit` or input ends.

use crate::error::{SessionResult, StorageResult};
use crate::handlers::{self, Command, FAREWELL};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const EMPTY_INPUT: &str = "You didn't enter any command.";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive run over a loaded address book.
pub struct Session<R> {
    repository: R,
    book: AddressBook,
    state: SessionState,
}

impl<R: AddressBookRepository> Session<R> {
    /// Load the book from `repository` and start in the running state.
    pub fn start(repository: R) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Session started with {} contacts", book.len());
        Ok(Self {
            repository,
            book,
            state: SessionState::Running,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Handle one line of input and return the reply to print.
    ///
    /// Only persisting the book on exit can fail; every command failure is
    /// already part of the reply.
    pub fn handle_line(&mut self, line: &str) -> StorageResult<String> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(EMPTY_INPUT.to_string());
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("Unknown command {:?}", word);
                return Ok(handlers::respond(Err(e)));
            }
        };

        if command.is_exit() {
            self.finish()?;
        }

        debug!("Dispatching {:?} with {} args", command, args.len());
        Ok(handlers::respond(handlers::execute(
            command,
            &args,
            &mut self.book,
        )))
    }

    /// Save the book and stop accepting commands.
    pub fn finish(&mut self) -> StorageResult<()> {
        self.repository.save(&self.book)?;
        self.state = SessionState::Terminated;
        info!("Session finished, saved {} contacts", self.book.len());
        Ok(())
    }

    /// Drive the session until the user exits or `input` runs dry.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> SessionResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut line = String::new();
        while self.state == SessionState::Running {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input counts as `exit`.
                self.finish()?;
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                break;
            }

            let reply = self.handle_line(&line)?;
            writeln!(output, "{}", reply)?;
        }

        output.flush()?;
        Ok(())
    }
}
