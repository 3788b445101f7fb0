//! Column auto-detection.
//!
//! Headers are matched by lower-cased substring containment against a fixed
//! predicate per logical field. The first header satisfying a field's
//! predicate wins that field; one header may satisfy several fields.

use reach_model::{ColumnMapping, ContactField};
use tracing::debug;

/// Suggests a [`ColumnMapping`] for a set of CSV headers.
///
/// Pure and idempotent: the same headers always yield the same mapping.
pub fn auto_detect_mapping(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for header in headers {
        let lower = header.to_lowercase();
        for field in ContactField::ALL {
            if mapping.get(field).is_none() && field_matches(field, &lower) {
                mapping.set(field, header.clone());
            }
        }
    }
    debug!(detected = mapping.len(), headers = headers.len(), "auto-detected column mapping");
    mapping
}

/// Substring predicate for one logical field against a lower-cased header.
fn field_matches(field: ContactField, lower: &str) -> bool {
    match field {
        ContactField::Email => lower.contains("email"),
        ContactField::FirstName => lower.contains("first") && lower.contains("name"),
        ContactField::LastName => lower.contains("last") && lower.contains("name"),
        ContactField::Company => lower.contains("company"),
        ContactField::Status => lower.contains("status"),
        ContactField::Message => lower.contains("message") || lower.contains("sent"),
        ContactField::TemplateTitle => lower.contains("template"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn detects_common_headers() {
        let mapping = auto_detect_mapping(&headers(&[
            "Email Address",
            "First Name",
            "Company Name",
        ]));
        assert_eq!(mapping.get(ContactField::Email), Some("Email Address"));
        assert_eq!(mapping.get(ContactField::FirstName), Some("First Name"));
        assert_eq!(mapping.get(ContactField::Company), Some("Company Name"));
        assert_eq!(mapping.get(ContactField::LastName), None);
    }

    #[test]
    fn first_matching_header_wins() {
        let mapping = auto_detect_mapping(&headers(&["Work Email", "Personal Email"]));
        assert_eq!(mapping.get(ContactField::Email), Some("Work Email"));
    }

    #[test]
    fn one_header_can_fill_several_fields() {
        // No exclusivity: a header containing both predicates fills both.
        let mapping = auto_detect_mapping(&headers(&["Message Sent Status"]));
        assert_eq!(mapping.get(ContactField::Status), Some("Message Sent Status"));
        assert_eq!(mapping.get(ContactField::Message), Some("Message Sent Status"));
    }

    #[test]
    fn sent_counts_as_message() {
        let mapping = auto_detect_mapping(&headers(&["Last Sent"]));
        assert_eq!(mapping.get(ContactField::Message), Some("Last Sent"));
    }

    #[test]
    fn detection_is_idempotent() {
        let cols = headers(&["Email", "First Name", "Status"]);
        assert_eq!(auto_detect_mapping(&cols), auto_detect_mapping(&cols));
    }
}
