//! Error types for mapping operations.

use reach_model::{ColumnMapping, ContactField};
use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    /// The named column does not exist in the source data.
    #[error("column not found in source data: {0}")]
    ColumnNotFound(String),
}

/// Assigns `header` to `field` after checking it exists among `headers`.
///
/// Manual overrides go through this so a typo surfaces immediately instead of
/// silently producing empty contacts.
pub fn assign_column(
    mapping: &mut ColumnMapping,
    headers: &[String],
    field: ContactField,
    header: &str,
) -> Result<(), MappingError> {
    if !headers.iter().any(|h| h == header) {
        return Err(MappingError::ColumnNotFound(header.to_string()));
    }
    mapping.set(field, header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_rejects_unknown_column() {
        let headers = vec!["Email".to_string()];
        let mut mapping = ColumnMapping::new();
        let err = assign_column(&mut mapping, &headers, ContactField::Email, "EMail Addr")
            .unwrap_err();
        assert_eq!(err, MappingError::ColumnNotFound("EMail Addr".to_string()));
        assert!(mapping.is_empty());
    }

    #[test]
    fn assign_sets_known_column() {
        let headers = vec!["Email".to_string()];
        let mut mapping = ColumnMapping::new();
        assign_column(&mut mapping, &headers, ContactField::Email, "Email").unwrap();
        assert_eq!(mapping.get(ContactField::Email), Some("Email"));
    }
}
