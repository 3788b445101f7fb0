//! Contact persistence seam.
//!
//! The import pipeline hands [`ContactList`] and [`CandidateContact`] values
//! by value to a [`ContactRepository`], which assigns identity and timestamps
//! and owns the records thereafter. Two implementations are provided and
//! selected at construction time: [`MemoryRepository`] for tests and dry
//! runs, and [`JsonStoreRepository`] backed by a directory of JSON documents.
//!
//! Saves are last-write-wins on a normalized name key; uniqueness is enforced
//! by the import planner before anything is saved.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use reach_model::{CandidateContact, ContactList, ListSummary, StoredContact, StoredList};

/// Persistence-layer failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Storage for contact lists and their contacts.
pub trait ContactRepository {
    /// Summaries of every stored list, used for pre-import uniqueness checks.
    fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError>;

    /// Persists a list and its contacts, assigning identity and timestamps.
    fn save_list(
        &mut self,
        list: ContactList,
        contacts: Vec<CandidateContact>,
    ) -> Result<StoredList, RepositoryError>;

    /// Loads a stored list by name (trim- and case-insensitive).
    fn load_list(&self, name: &str) -> Result<Option<StoredList>, RepositoryError>;

    /// Deletes a stored list by name. Returns true if one existed.
    fn delete_list(&mut self, name: &str) -> Result<bool, RepositoryError>;
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn build_stored(id: String, list: ContactList, contacts: Vec<CandidateContact>) -> StoredList {
    let now = Utc::now().to_rfc3339();
    let contacts = contacts
        .into_iter()
        .enumerate()
        .map(|(idx, contact)| StoredContact {
            id: format!("{id}-{}", idx + 1),
            contact,
        })
        .collect();
    StoredList {
        id,
        created_at: now.clone(),
        updated_at: now,
        list,
        contacts,
    }
}

/// In-process repository with no ambient state.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    lists: BTreeMap<String, StoredList>,
    next_id: u64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for MemoryRepository {
    fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError> {
        Ok(self.lists.values().map(StoredList::summary).collect())
    }

    fn save_list(
        &mut self,
        list: ContactList,
        contacts: Vec<CandidateContact>,
    ) -> Result<StoredList, RepositoryError> {
        self.next_id += 1;
        let stored = build_stored(format!("list-{}", self.next_id), list, contacts);
        self.lists
            .insert(normalize_key(&stored.list.name), stored.clone());
        Ok(stored)
    }

    fn load_list(&self, name: &str) -> Result<Option<StoredList>, RepositoryError> {
        Ok(self.lists.get(&normalize_key(name)).cloned())
    }

    fn delete_list(&mut self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.lists.remove(&normalize_key(name)).is_some())
    }
}

/// Repository backed by a directory of JSON documents, one per list.
///
/// The filename is derived from the normalized list name; the directory is
/// created on construction.
#[derive(Debug, Clone)]
pub struct JsonStoreRepository {
    base_dir: PathBuf,
}

impl JsonStoreRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", file_id(name)))
    }
}

/// Normalizes a list name into a filesystem-safe file stem.
fn file_id(name: &str) -> String {
    normalize_key(name)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

impl ContactRepository for JsonStoreRepository {
    fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str::<StoredList>(&contents) {
                Ok(stored) => summaries.push(stored.summary()),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable store entry");
                }
            }
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    fn save_list(
        &mut self,
        list: ContactList,
        contacts: Vec<CandidateContact>,
    ) -> Result<StoredList, RepositoryError> {
        let id = file_id(&list.name);
        let stored = build_stored(id, list, contacts);
        let path = self.file_for(&stored.list.name);
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "saved contact list");
        Ok(stored)
    }

    fn load_list(&self, name: &str) -> Result<Option<StoredList>, RepositoryError> {
        let path = self.file_for(name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn delete_list(&mut self, name: &str) -> Result<bool, RepositoryError> {
        let path = self.file_for(name);
        if path.exists() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_id_is_filesystem_safe() {
        assert_eq!(file_id("batch_17/11/2025"), "batch_17_11_2025");
        assert_eq!(file_id("  My Leads  "), "my_leads");
    }
}
