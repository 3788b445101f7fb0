//! Message-template placeholder substitution.
//!
//! Templates use `{{placeholder}}` tokens filled from a contact's fields.
//! Unknown tokens are left intact so the caller can surface them instead of
//! sending a half-filled message.

use std::collections::BTreeMap;

use reach_model::CandidateContact;

/// Replaces `{{key}}` tokens with `values[key]`.
///
/// Whitespace inside the braces is tolerated (`{{ firstName }}`). Tokens with
/// no value, and stray `{{` without a closing `}}`, pass through unchanged.
pub fn substitute_placeholders(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match values.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(&after[..end]);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// The placeholder values one contact provides.
///
/// Keys match the token spellings used in templates (`firstName`,
/// `lastName`, `company`, `email`, `status`). Blank fields contribute no
/// entry, so their tokens stay visible after substitution.
pub fn contact_placeholders(contact: &CandidateContact) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    let mut put = |key: &str, field: Option<&str>| {
        if let Some(value) = field
            && !value.trim().is_empty()
        {
            values.insert(key.to_string(), value.trim().to_string());
        }
    };
    put("firstName", contact.first_name.as_deref());
    put("lastName", contact.last_name.as_deref());
    put("company", contact.company.as_deref());
    put("email", contact.email.as_deref());
    values.insert("status".to_string(), contact.status.label().to_string());
    values
}

/// Distinct placeholder tokens present in `text`, in order of appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else { break };
        let key = after[..end].trim();
        if !key.is_empty() && !found.iter().any(|seen| seen == key) {
            found.push(key.to_string());
        }
        rest = &after[end + 2..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use reach_model::ContactStatus;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn substitutes_known_tokens() {
        let out = substitute_placeholders(
            "Hi {{firstName}}, saw {{company}} is hiring.",
            &values(&[("firstName", "Ada"), ("company", "Acme")]),
        );
        assert_eq!(out, "Hi Ada, saw Acme is hiring.");
    }

    #[test]
    fn tolerates_inner_whitespace() {
        let out = substitute_placeholders("Hi {{ firstName }}!", &values(&[("firstName", "Ada")]));
        assert_eq!(out, "Hi Ada!");
    }

    #[test]
    fn unknown_tokens_survive() {
        let out = substitute_placeholders("Hi {{firstName}}", &values(&[]));
        assert_eq!(out, "Hi {{firstName}}");
    }

    #[test]
    fn stray_open_braces_pass_through() {
        let out = substitute_placeholders("a {{ b", &values(&[("b", "x")]));
        assert_eq!(out, "a {{ b");
    }

    #[test]
    fn contact_supplies_trimmed_values_and_status_label() {
        let contact = CandidateContact {
            first_name: Some("  Ada ".to_string()),
            company: Some("   ".to_string()),
            status: ContactStatus::MeetingScheduled,
            ..CandidateContact::default()
        };
        let values = contact_placeholders(&contact);
        assert_eq!(values.get("firstName").map(String::as_str), Some("Ada"));
        assert!(!values.contains_key("company"));
        assert_eq!(
            values.get("status").map(String::as_str),
            Some("Meeting Scheduled")
        );
    }

    #[test]
    fn lists_distinct_unresolved_tokens() {
        let tokens = unresolved_placeholders("{{a}} {{b}} {{a}}");
        assert_eq!(tokens, vec!["a", "b"]);
    }
}
