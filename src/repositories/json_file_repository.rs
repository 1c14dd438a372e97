use super::traits::AddressBookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Schema version written into every data file.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the data file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Address book repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No data file at {:?}, starting with an empty book", self.path);
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredBook = serde_json::from_str(&content)?;
        if stored.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }

        info!(
            "Loaded {} contacts from {:?}",
            stored.contacts.len(),
            self.path
        );
        Ok(stored.contacts.into_iter().collect())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let stored = StoredBook {
            version: FORMAT_VERSION,
            contacts: book.records().to_vec(),
        };
        let content = serde_json::to_string_pretty(&stored)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!("Failed to remove temp file {:?}: {}", temp_path, cleanup);
            }
            return Err(e.into());
        }

        debug!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
