//! Outreach pipeline stage of a contact.
//!
//! Status values arrive from user-supplied CSV files in many spellings
//! ("Replied", "meeting scheduled", "MEETING_SCHEDULED"). [`ContactStatus::from_raw`]
//! normalizes them; anything unrecognized falls back to [`ContactStatus::NotContacted`]
//! rather than failing the import.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of a contact in the outreach pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// No outreach attempt yet. The default for unmapped or unrecognized values.
    #[default]
    NotContacted,
    /// An initial message was sent.
    Contacted,
    /// The contact replied.
    Replied,
    /// A meeting has been booked.
    MeetingScheduled,
    /// The meeting took place.
    MeetingCompleted,
    /// Qualified as a prospect.
    Qualified,
    /// Disqualified after evaluation.
    NotQualified,
    /// Outreach ran its course without a reply.
    NoResponse,
}

impl ContactStatus {
    /// Every status, in pipeline order.
    pub const ALL: [ContactStatus; 8] = [
        ContactStatus::NotContacted,
        ContactStatus::Contacted,
        ContactStatus::Replied,
        ContactStatus::MeetingScheduled,
        ContactStatus::MeetingCompleted,
        ContactStatus::Qualified,
        ContactStatus::NotQualified,
        ContactStatus::NoResponse,
    ];

    /// Canonical wire value (snake_case), matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::NotContacted => "not_contacted",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Replied => "replied",
            ContactStatus::MeetingScheduled => "meeting_scheduled",
            ContactStatus::MeetingCompleted => "meeting_completed",
            ContactStatus::Qualified => "qualified",
            ContactStatus::NotQualified => "not_qualified",
            ContactStatus::NoResponse => "no_response",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::NotContacted => "Not Contacted",
            ContactStatus::Contacted => "Contacted",
            ContactStatus::Replied => "Replied",
            ContactStatus::MeetingScheduled => "Meeting Scheduled",
            ContactStatus::MeetingCompleted => "Meeting Completed",
            ContactStatus::Qualified => "Qualified",
            ContactStatus::NotQualified => "Not Qualified",
            ContactStatus::NoResponse => "No Response",
        }
    }

    /// Parses a raw CSV cell into a status.
    ///
    /// The value is trimmed, lower-cased, and whitespace runs are collapsed to
    /// `_` before matching against the wire values; if that fails, the raw
    /// value is compared case-insensitively against each display label.
    /// Unmatched or empty input yields [`ContactStatus::NotContacted`].
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        let normalized = trimmed
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        for status in Self::ALL {
            if normalized == status.as_str() {
                return status;
            }
        }
        for status in Self::ALL {
            if trimmed.eq_ignore_ascii_case(status.label()) {
                return status;
            }
        }
        ContactStatus::NotContacted
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
