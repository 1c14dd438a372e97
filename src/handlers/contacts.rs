//! Handlers for creating, changing, and listing contacts and their phones.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

const ADD_USAGE: &str = "Invalid command. Use 'add [name] [phone]'.";
const CHANGE_USAGE: &str = "Invalid command. Please use 'change [name] [new_phone]'.";
const PHONE_USAGE: &str = "Invalid command. Use 'phone [name]'.";

/// `add [name] [phone]`: add a phone to a contact, creating it if needed.
///
/// Tokens past the second are ignored.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(CommandError::Usage(ADD_USAGE)),
    };

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        debug!("Created contact {}", name);
        "Contact added."
    };

    // The contact stays in the book even when its phone is rejected.
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?
        .add_phone(phone)?;

    Ok(format!("{} Phone number: {}", message, phone))
}

/// `change [name] [new_phone]`: replace every phone of a contact.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone] = args else {
        return Err(CommandError::Usage(CHANGE_USAGE));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.replace_phones(new_phone)?;

    Ok(format!("Phone number changed for {}.", name))
}

/// `phone [name]`: list a contact's phone numbers.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage(PHONE_USAGE));
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if record.phones().is_empty() {
        Ok(format!("{} doesn't have a phone number set.", name))
    } else {
        Ok(format!(
            "{}'s phone number is: {}",
            name,
            record.phones_joined()
        ))
    }
}

/// `all`: one line per contact with its phones.
pub fn show_all_contacts(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = book
        .records()
        .iter()
        .map(|record| {
            if record.phones().is_empty() {
                record.name().to_string()
            } else {
                format!("{}: {}", record.name(), record.phones_joined())
            }
        })
        .collect();

    Ok(lines.join("\n"))
}
