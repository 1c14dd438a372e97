//! Handlers for contact birthdays.

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;

const ADD_BIRTHDAY_USAGE: &str = "Invalid command. Use 'add-birthday [name] [date]'.";
const SHOW_BIRTHDAY_USAGE: &str = "Invalid command. Use 'show-birthday [name]'.";

/// `add-birthday [name] [date]`: set or overwrite a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(CommandError::Usage(ADD_BIRTHDAY_USAGE));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.add_birthday(date)?;

    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage(SHOW_BIRTHDAY_USAGE));
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday is: {}", name, birthday)),
        None => Ok(format!("{} doesn't have a birthday set.", name)),
    }
}

/// `birthdays`: every contact that has a birthday.
pub fn birthdays(book: &AddressBook) -> CommandResult<String> {
    let lines: Vec<String> = book
        .birthdays()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();

    if lines.is_empty() {
        Ok("No birthdays found.".to_string())
    } else {
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice"));
        book.add_record(Record::new("Bob"));
        book
    }

    #[test]
    fn test_add_birthday() {
        let mut book = sample_book();
        let msg = add_birthday(&["alice", "15.03.1990"], &mut book).unwrap();
        assert_eq!(msg, "Birthday added for alice.");
        assert_eq!(
            book.find("Alice").unwrap().birthday().unwrap().to_string(),
            "15.03.1990"
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = sample_book();
        let err = add_birthday(&["Alice", "1990-03-15"], &mut book).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::InvalidBirthday(_))
        ));
        assert!(book.find("Alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_add_birthday_unknown_contact() {
        let mut book = sample_book();
        assert_eq!(
            add_birthday(&["Carol", "15.03.1990"], &mut book),
            Err(CommandError::NotFound("Carol".to_string()))
        );
    }

    #[test]
    fn test_add_birthday_usage() {
        let mut book = sample_book();
        assert_eq!(
            add_birthday(&["Alice"], &mut book),
            Err(CommandError::Usage(ADD_BIRTHDAY_USAGE))
        );
    }

    #[test]
    fn test_show_birthday() {
        let mut book = sample_book();
        add_birthday(&["Alice", "01.02.2003"], &mut book).unwrap();

        assert_eq!(
            show_birthday(&["Alice"], &book).unwrap(),
            "Alice's birthday is: 01.02.2003"
        );
        assert_eq!(
            show_birthday(&["Bob"], &book).unwrap(),
            "Bob doesn't have a birthday set."
        );
        assert_eq!(
            show_birthday(&["Carol"], &book),
            Err(CommandError::NotFound("Carol".to_string()))
        );
        assert_eq!(
            show_birthday(&["Alice", "Bob"], &book),
            Err(CommandError::Usage(SHOW_BIRTHDAY_USAGE))
        );
    }

    #[test]
    fn test_birthdays_none() {
        assert_eq!(birthdays(&sample_book()).unwrap(), "No birthdays found.");
    }

    #[test]
    fn test_birthdays_lists_only_contacts_with_birthday() {
        let mut book = sample_book();
        add_birthday(&["Bob", "29.02.2000"], &mut book).unwrap();
        assert_eq!(birthdays(&book).unwrap(), "Bob: 29.02.2000");
    }
}
