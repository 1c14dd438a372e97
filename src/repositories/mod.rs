mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, FORMAT_VERSION};
pub use traits::AddressBookRepository;
