//! Contact and contact-list records.
//!
//! [`CandidateContact`] and [`ContactList`] are produced by the import
//! pipeline and handed by value to a repository, which assigns identity and
//! timestamps and returns the stored shapes ([`StoredContact`], [`StoredList`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::ContactStatus;

/// A contact produced by the mapping step, prior to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub template_title: Option<String>,
}

impl CandidateContact {
    /// True when at least one of email, first name, last name, or company is
    /// non-empty after trimming. Rows without identity are dropped silently at
    /// materialization.
    pub fn has_identity(&self) -> bool {
        [&self.email, &self.first_name, &self.last_name, &self.company]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()))
    }

    /// Display name assembled from first/last name, falling back to company
    /// and then email.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first) = self.first_name.as_deref().filter(|v| !v.trim().is_empty()) {
            parts.push(first.trim());
        }
        if let Some(last) = self.last_name.as_deref().filter(|v| !v.trim().is_empty()) {
            parts.push(last.trim());
        }
        if !parts.is_empty() {
            return parts.join(" ");
        }
        self.company
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Where a contact list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSource {
    /// Created by importing a CSV file.
    CsvImport,
    /// Created by hand in the application.
    Manual,
}

impl ListSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSource::CsvImport => "csv_import",
            ListSource::Manual => "manual",
        }
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata record grouping one batch of contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactList {
    /// Derived as `<base name>_<dd/mm/yyyy>`; unique case-insensitively among
    /// the caller's lists.
    pub name: String,
    /// Source filename for CSV imports, `None` for manual lists.
    pub csv_file_name: Option<String>,
    pub source: ListSource,
    /// Count of contacts that survived the emptiness filter.
    pub contact_count: usize,
    pub description: Option<String>,
}

/// The persistence layer's view of an existing list, used for uniqueness
/// checks before an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub name: String,
    pub csv_file_name: Option<String>,
}

/// A contact as stored by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContact {
    pub id: String,
    #[serde(flatten)]
    pub contact: CandidateContact,
}

/// A list as stored by a repository, with assigned identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredList {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub list: ContactList,
    pub contacts: Vec<StoredContact>,
}

impl StoredList {
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            name: self.list.name.clone(),
            csv_file_name: self.list.csv_file_name.clone(),
        }
    }
}
