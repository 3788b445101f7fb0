//! Import planning.
//!
//! Planning is pure: given mapped rows, a source name, the caller's existing
//! list summaries, and a run date, it derives the list name, rejects
//! duplicates, filters identity-less rows, and returns the list record plus
//! surviving contacts. Either the whole plan succeeds or a duplicate error is
//! returned before any row is touched; persistence happens elsewhere.

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::info;

use reach_model::{CandidateContact, ContactList, ListSource, ListSummary};

/// Import rejections, surfaced to the user as a failed import.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// A list with the derived name already exists (case-insensitive, trimmed).
    #[error("a contact list named \"{0}\" already exists")]
    DuplicateListName(String),
    /// The source file was already imported (extension-stripped,
    /// case-insensitive).
    #[error("the file \"{0}\" has already been imported")]
    DuplicateFileName(String),
}

/// The outcome of planning: one list record and the contacts to create in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    pub list: ContactList,
    pub contacts: Vec<CandidateContact>,
}

/// Derives a list name as `<base>_<dd/mm/yyyy>` from a filename or
/// user-supplied list name.
pub fn derive_list_name(name: &str, run_date: NaiveDate) -> String {
    format!("{}_{}", base_name(name), run_date.format("%d/%m/%Y"))
}

/// Strips one trailing `.csv` (case-insensitive), trimming both sides.
fn base_name(name: &str) -> &str {
    let trimmed = name.trim();
    let stripped = if trimmed.len() >= 4
        && trimmed.is_char_boundary(trimmed.len() - 4)
        && trimmed[trimmed.len() - 4..].eq_ignore_ascii_case(".csv")
    {
        &trimmed[..trimmed.len() - 4]
    } else {
        trimmed
    };
    stripped.trim()
}

fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Plans an import against the caller's existing lists.
///
/// `csv_file_name` is `Some` for CSV imports and `None` for manual lists; the
/// duplicate-filename check only runs when a filename was supplied, while the
/// duplicate-list-name check always runs.
pub fn plan_import(
    rows: Vec<CandidateContact>,
    name: &str,
    csv_file_name: Option<&str>,
    description: Option<String>,
    existing: &[ListSummary],
    run_date: NaiveDate,
) -> Result<ImportPlan, ImportError> {
    let list_name = derive_list_name(name, run_date);
    let wanted_name = normalized(&list_name);
    if existing.iter().any(|list| normalized(&list.name) == wanted_name) {
        return Err(ImportError::DuplicateListName(list_name));
    }

    if let Some(file) = csv_file_name {
        let wanted_file = normalized(base_name(file));
        let clash = existing.iter().any(|list| {
            list.csv_file_name
                .as_deref()
                .is_some_and(|existing_file| normalized(base_name(existing_file)) == wanted_file)
        });
        if clash {
            return Err(ImportError::DuplicateFileName(file.trim().to_string()));
        }
    }

    let total = rows.len();
    let contacts: Vec<CandidateContact> = rows
        .into_iter()
        .filter(|contact| contact.has_identity())
        .collect();
    let source = if csv_file_name.is_some() {
        ListSource::CsvImport
    } else {
        ListSource::Manual
    };
    let list = ContactList {
        name: list_name,
        csv_file_name: csv_file_name.map(|file| file.trim().to_string()),
        source,
        contact_count: contacts.len(),
        description,
    };
    let skipped = total - list.contact_count;
    info!(list = %list.name, contacts = list.contact_count, skipped, "planned import");
    Ok(ImportPlan { list, contacts })
}

/// [`plan_import`] with the run date taken from the local clock.
pub fn plan_import_today(
    rows: Vec<CandidateContact>,
    name: &str,
    csv_file_name: Option<&str>,
    description: Option<String>,
    existing: &[ListSummary],
) -> Result<ImportPlan, ImportError> {
    plan_import(
        rows,
        name,
        csv_file_name,
        description,
        existing,
        Local::now().date_naive(),
    )
}
