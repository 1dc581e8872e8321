use crate::domain::model::Contact;
use crate::domain::ports::{ContactRepository, LoadOutcome};
use crate::utils::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<Contact>,
}

/// Address book stored as one JSON document on the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> BookError {
        BookError::CorruptData {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ContactRepository for JsonFileStorage {
    fn load(&self) -> Result<LoadOutcome> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No address book at {}", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(BookError::IoError(e)),
        };

        let file: BookFile = serde_json::from_slice(&data).map_err(|e| self.corrupt(e))?;
        if file.version != FORMAT_VERSION {
            return Err(self.corrupt(format!(
                "unsupported format version {} (expected {})",
                file.version, FORMAT_VERSION
            )));
        }

        tracing::info!(
            "📁 Loaded {} contacts from {}",
            file.contacts.len(),
            self.path.display()
        );
        Ok(LoadOutcome::Loaded(file.contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<()> {
        #[derive(Serialize)]
        struct BookFileRef<'a> {
            version: u32,
            contacts: &'a [Contact],
        }

        let data = serde_json::to_vec_pretty(&BookFileRef {
            version: FORMAT_VERSION,
            contacts,
        })
        .map_err(|e| BookError::IoError(e.into()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // 先寫暫存檔再 rename，中途失敗不會留下半寫的檔案
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&data)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| BookError::IoError(e.error))?;
        tracing::info!(
            "💾 Saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
