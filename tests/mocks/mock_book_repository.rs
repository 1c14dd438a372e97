use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved book in memory and tracks method calls for verification.
/// Clones share state, so a test can keep one handle while a session owns
/// another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<AddressBook>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new repository holding an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose next load returns `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = book;
        repo
    }

    /// The most recently saved book.
    pub fn stored(&self) -> AddressBook {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::other("mock save failure")));
        }

        *self.stored.lock().unwrap() = book.clone();
        Ok(())
    }
}
