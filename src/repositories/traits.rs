use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The whole book is loaded once when a session starts and saved once when
/// it ends, so implementations work on the complete structure rather than
/// single records.
pub trait AddressBookRepository {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
