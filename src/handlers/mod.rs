//! Command handlers for the interactive session.
//!
//! Every command word maps to a [`Command`]. Handlers return a
//! [`CommandResult`]; [`respond`] turns that into the single message shown to
//! the user, so a failed command never ends the session.

pub mod birthdays;
pub mod contacts;

pub use birthdays::{add_birthday, birthdays, show_birthday};
pub use contacts::{add_contact, change_contact, show_all_contacts, show_phone};

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use std::str::FromStr;
use tracing::debug;

/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Last line printed before the session ends.
pub const FAREWELL: &str = "Good bye!";

const HELP_LINES: &[&str] = &[
    "hello - Greetings from the bot",
    "add [name] [phone] - Add a contact with a phone number",
    "change [name] [new_phone] - Change the phone number of an existing contact",
    "phone [name] - Show the phone number of a contact",
    "all - Show all contacts",
    "add-birthday [name] [date] - Add a birthday to a contact",
    "show-birthday [name] - Show the birthday of a contact",
    "birthdays - Show all birthdays",
    "close, exit - Exit the program",
    "help - Show this help message",
];

/// A recognised command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Whether this command ends the session.
    pub fn is_exit(self) -> bool {
        matches!(self, Command::Exit)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Exact, case-sensitive match on the command word.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "hello" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Fixed list of every command and its syntax.
pub fn help_text() -> String {
    HELP_LINES.join("\n")
}

/// Run one command against the book.
///
/// `Exit` only yields the farewell line; the session saves the book before
/// dispatching it.
pub fn execute(command: Command, args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    match command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Help => Ok(help_text()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => show_all_contacts(book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => birthdays(book),
        Command::Exit => Ok(FAREWELL.to_string()),
    }
}

/// Render a handler outcome as the line shown to the user.
///
/// Validation failures are prefixed with `Error: `; lookups and usage hints
/// carry their own wording.
pub fn respond(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(CommandError::Validation(e)) => {
            debug!("Command rejected: {:?}", e);
            format!("Error: {}", e)
        }
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_command_parsing() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("add-birthday".parse::<Command>().unwrap(), Command::AddBirthday);
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert!("exit".parse::<Command>().unwrap().is_exit());
        assert!(!"all".parse::<Command>().unwrap().is_exit());
    }

    #[test]
    fn test_command_parsing_is_case_sensitive() {
        assert_eq!(
            "Add".parse::<Command>(),
            Err(CommandError::UnknownCommand("Add".to_string()))
        );
        assert!("HELLO".parse::<Command>().is_err());
        assert!("remove".parse::<Command>().is_err());
    }

    #[test]
    fn test_respond_formats_validation_errors() {
        let result: CommandResult<String> =
            Err(ValidationError::InvalidPhone("1".to_string()).into());
        assert_eq!(
            respond(result),
            "Error: Phone number must be a 10-digit number."
        );
    }

    #[test]
    fn test_respond_passes_other_outcomes_through() {
        assert_eq!(respond(Ok("done".to_string())), "done");
        assert_eq!(
            respond(Err(CommandError::NotFound("Bob".to_string()))),
            "Contact Bob not found."
        );
        assert_eq!(
            respond(Err(CommandError::Usage("Invalid command. Use 'phone [name]'."))),
            "Invalid command. Use 'phone [name]'."
        );
    }

    #[test]
    fn test_execute_hello_and_help() {
        let mut book = AddressBook::new();
        assert_eq!(
            execute(Command::Hello, &[], &mut book).unwrap(),
            "How can I help you?"
        );

        let help = execute(Command::Help, &[], &mut book).unwrap();
        assert_eq!(help.lines().count(), 10);
        assert!(help.starts_with("hello - "));
        assert!(help.contains("add-birthday [name] [date]"));
    }

    #[test]
    fn test_execute_exit_leaves_book_untouched() {
        let mut book = AddressBook::new();
        assert_eq!(execute(Command::Exit, &[], &mut book).unwrap(), FAREWELL);
        assert!(book.is_empty());
    }

    #[test]
    fn test_respond_renders_unknown_command() {
        assert_eq!(
            respond(Err(CommandError::UnknownCommand("frobnicate".to_string()))),
            "Invalid command. Type 'help' to see the list of available commands."
        );
    }

    #[test]
    fn test_execute_routes_to_handlers() {
        let mut book = AddressBook::new();
        execute(Command::Add, &["Alice", "1234567890"], &mut book).unwrap();
        execute(Command::AddBirthday, &["Alice", "15.03.1990"], &mut book).unwrap();

        assert_eq!(
            execute(Command::All, &["ignored"], &mut book).unwrap(),
            "Alice: 1234567890"
        );
        assert_eq!(
            execute(Command::Birthdays, &[], &mut book).unwrap(),
            "Alice: 15.03.1990"
        );
    }
}
