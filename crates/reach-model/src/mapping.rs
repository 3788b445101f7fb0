//! Column mapping types for CSV-to-contact imports.
//!
//! A [`ColumnMapping`] assigns a CSV header to each logical
//! [`ContactField`]. It is built by auto-detection and then optionally
//! adjusted by the caller before rows are materialized.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical contact field a CSV column can map to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    FirstName,
    LastName,
    Company,
    Status,
    Message,
    TemplateTitle,
}

impl ContactField {
    /// Every field, in auto-detection priority order.
    pub const ALL: [ContactField; 7] = [
        ContactField::Email,
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Company,
        ContactField::Status,
        ContactField::Message,
        ContactField::TemplateTitle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Company => "company",
            ContactField::Status => "status",
            ContactField::Message => "message",
            ContactField::TemplateTitle => "template_title",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = String;

    /// Accepts snake_case and camelCase spellings (`first_name`, `firstName`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = s.trim().to_lowercase().replace(['_', '-'], "");
        match compact.as_str() {
            "email" => Ok(ContactField::Email),
            "firstname" => Ok(ContactField::FirstName),
            "lastname" => Ok(ContactField::LastName),
            "company" => Ok(ContactField::Company),
            "status" => Ok(ContactField::Status),
            "message" => Ok(ContactField::Message),
            "templatetitle" | "template" => Ok(ContactField::TemplateTitle),
            _ => Err(format!("unknown contact field: {s}")),
        }
    }
}

/// Assignment of CSV headers to logical contact fields.
///
/// Fields without an assignment are simply absent; materialization treats
/// them as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: BTreeMap<ContactField, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The CSV header assigned to `field`, if any.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    /// Assigns `header` to `field`, replacing any previous assignment.
    pub fn set(&mut self, field: ContactField, header: impl Into<String>) {
        self.columns.insert(field, header.into());
    }

    /// Removes the assignment for `field`. Returns true if one existed.
    pub fn clear(&mut self, field: ContactField) -> bool {
        self.columns.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Iterates assignments in fixed field priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        ContactField::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|header| (*field, header)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        let mut mapping = ColumnMapping::new();
        assert!(mapping.is_empty());
        mapping.set(ContactField::Email, "Email Address");
        assert_eq!(mapping.get(ContactField::Email), Some("Email Address"));
        assert_eq!(mapping.len(), 1);
        assert!(mapping.clear(ContactField::Email));
        assert!(!mapping.clear(ContactField::Email));
        assert!(mapping.is_empty());
    }

    #[test]
    fn iter_follows_priority_order() {
        let mut mapping = ColumnMapping::new();
        mapping.set(ContactField::Status, "Status");
        mapping.set(ContactField::Email, "Email");
        let order: Vec<ContactField> = mapping.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![ContactField::Email, ContactField::Status]);
    }

    #[test]
    fn field_parses_both_spellings() {
        assert_eq!(
            "firstName".parse::<ContactField>().unwrap(),
            ContactField::FirstName
        );
        assert_eq!(
            "template_title".parse::<ContactField>().unwrap(),
            ContactField::TemplateTitle
        );
        assert!("unknown".parse::<ContactField>().is_err());
    }
}
