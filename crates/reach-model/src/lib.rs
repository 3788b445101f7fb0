pub mod contact;
pub mod mapping;
pub mod status;

pub use contact::{
    CandidateContact, ContactList, ListSource, ListSummary, StoredContact, StoredList,
};
pub use mapping::{ColumnMapping, ContactField};
pub use status::ContactStatus;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_list_serializes() {
        let stored = StoredList {
            id: "list-1".to_string(),
            created_at: "2025-11-17T09:00:00Z".to_string(),
            updated_at: "2025-11-17T09:00:00Z".to_string(),
            list: ContactList {
                name: "batch_17/11/2025".to_string(),
                csv_file_name: Some("batch.csv".to_string()),
                source: ListSource::CsvImport,
                contact_count: 1,
                description: None,
            },
            contacts: vec![StoredContact {
                id: "list-1-1".to_string(),
                contact: CandidateContact {
                    email: Some("john@x.com".to_string()),
                    status: ContactStatus::Replied,
                    ..CandidateContact::default()
                },
            }],
        };
        let json = serde_json::to_string(&stored).expect("serialize stored list");
        let round: StoredList = serde_json::from_str(&json).expect("deserialize stored list");
        assert_eq!(round, stored);
        assert_eq!(round.summary().name, "batch_17/11/2025");
    }
}
