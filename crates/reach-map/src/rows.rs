//! Row-to-contact materialization.

use reach_ingest::CsvTable;
use reach_model::{CandidateContact, ColumnMapping, ContactField, ContactStatus};

/// Maps every data row of `table` to a [`CandidateContact`] using `mapping`.
///
/// Output order equals input row order and no row is dropped here; the
/// emptiness filter runs later, at import planning. Values are trimmed and
/// empty values become `None`. Status cells are normalized through
/// [`ContactStatus::from_raw`]; unmapped or unrecognized values default to
/// `not_contacted`.
pub fn map_rows(table: &CsvTable, mapping: &ColumnMapping) -> Vec<CandidateContact> {
    table
        .rows
        .iter()
        .map(|row| {
            let cell = |field: ContactField| -> Option<String> {
                mapping
                    .get(field)
                    .and_then(|header| row.get(header))
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            };
            let status = mapping
                .get(ContactField::Status)
                .and_then(|header| row.get(header))
                .map(|value| ContactStatus::from_raw(value))
                .unwrap_or_default();
            CandidateContact {
                email: cell(ContactField::Email),
                first_name: cell(ContactField::FirstName),
                last_name: cell(ContactField::LastName),
                company: cell(ContactField::Company),
                status,
                message: cell(ContactField::Message),
                template_title: cell(ContactField::TemplateTitle),
            }
        })
        .collect()
}
