//! The CSV import workflow as an explicit sequence of steps.
//!
//! A session parses the uploaded CSV once, auto-detects the column mapping,
//! accepts manual overrides, and on submit validates uniqueness against the
//! repository's own summaries before persisting. Nothing is written when
//! validation fails.

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::info_span;

use reach_ingest::{CsvTable, ParseError, parse};
use reach_map::{MappingError, assign_column, auto_detect_mapping, map_rows};
use reach_model::{CandidateContact, ColumnMapping, ContactField, ListSummary, StoredList};

use crate::import::{ImportError, ImportPlan, plan_import};
use crate::repository::{ContactRepository, RepositoryError};

/// Failures while submitting a session.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One in-flight CSV import.
#[derive(Debug, Clone)]
pub struct ImportSession {
    file_name: String,
    list_name: Option<String>,
    description: Option<String>,
    table: CsvTable,
    mapping: ColumnMapping,
}

impl ImportSession {
    /// Parses the uploaded text and auto-detects the column mapping.
    pub fn from_csv(text: &str, file_name: &str) -> Result<Self, ParseError> {
        let table = parse(text)?;
        let mapping = auto_detect_mapping(&table.headers);
        Ok(Self {
            file_name: file_name.trim().to_string(),
            list_name: None,
            description: None,
            table,
            mapping,
        })
    }

    /// Uses `name` instead of the filename when deriving the list name. The
    /// filename still participates in the duplicate-file check.
    pub fn with_list_name(mut self, name: impl Into<String>) -> Self {
        self.list_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn headers(&self) -> &[String] {
        &self.table.headers
    }

    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Manually assigns a header to a field, rejecting unknown headers.
    pub fn override_mapping(
        &mut self,
        field: ContactField,
        header: &str,
    ) -> Result<(), MappingError> {
        assign_column(&mut self.mapping, &self.table.headers, field, header)
    }

    /// Removes a field's assignment. Returns true if one existed.
    pub fn clear_mapping(&mut self, field: ContactField) -> bool {
        self.mapping.clear(field)
    }

    /// All candidate contacts under the current mapping, in row order.
    pub fn preview(&self) -> Vec<CandidateContact> {
        map_rows(&self.table, &self.mapping)
    }

    /// Count of candidates that would survive the emptiness filter.
    pub fn candidate_count(&self) -> usize {
        self.preview()
            .iter()
            .filter(|contact| contact.has_identity())
            .count()
    }

    fn source_name(&self) -> &str {
        self.list_name.as_deref().unwrap_or(&self.file_name)
    }

    /// Plans the import against the given existing lists without persisting.
    pub fn plan(
        &self,
        existing: &[ListSummary],
        run_date: NaiveDate,
    ) -> Result<ImportPlan, ImportError> {
        plan_import(
            self.preview(),
            self.source_name(),
            Some(&self.file_name),
            self.description.clone(),
            existing,
            run_date,
        )
    }

    /// [`Self::plan`] with the run date taken from the local clock.
    pub fn plan_today(&self, existing: &[ListSummary]) -> Result<ImportPlan, ImportError> {
        self.plan(existing, Local::now().date_naive())
    }

    /// Validates uniqueness against the repository and persists the import.
    pub fn submit(
        &self,
        repository: &mut dyn ContactRepository,
        run_date: NaiveDate,
    ) -> Result<StoredList, SubmitError> {
        let span = info_span!("import", file = %self.file_name);
        let _guard = span.enter();
        let existing = repository.list_summaries()?;
        let plan = self.plan(&existing, run_date)?;
        Ok(repository.save_list(plan.list, plan.contacts)?)
    }

    /// [`Self::submit`] with the run date taken from the local clock.
    pub fn submit_today(
        &self,
        repository: &mut dyn ContactRepository,
    ) -> Result<StoredList, SubmitError> {
        self.submit(repository, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn session() -> ImportSession {
        ImportSession::from_csv(
            "Email,First Name,Status\njohn@x.com,John,Replied\n,,\n",
            "batch.csv",
        )
        .expect("parse")
    }

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn auto_detects_on_construction() {
        let session = session();
        assert_eq!(session.mapping().get(ContactField::Email), Some("Email"));
        assert_eq!(session.row_count(), 2);
        assert_eq!(session.candidate_count(), 1);
    }

    #[test]
    fn override_rejects_unknown_header() {
        let mut session = session();
        assert!(session.override_mapping(ContactField::Company, "Employer").is_err());
        assert!(session.override_mapping(ContactField::Company, "Email").is_ok());
    }

    #[test]
    fn submit_persists_and_duplicate_submit_fails() {
        let mut repository = MemoryRepository::new();
        let session = session();

        let stored = session
            .submit(&mut repository, date(17, 11, 2025))
            .expect("first submit");
        assert_eq!(stored.list.name, "batch_17/11/2025");
        assert_eq!(stored.list.contact_count, 1);

        let err = session
            .submit(&mut repository, date(17, 11, 2025))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Import(_)));
        assert_eq!(repository.list_summaries().unwrap().len(), 1);
    }
}
