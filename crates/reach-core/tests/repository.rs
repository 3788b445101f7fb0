use reach_core::{ContactRepository, JsonStoreRepository, MemoryRepository};
use reach_model::{CandidateContact, ContactList, ContactStatus, ListSource};

fn sample_list(name: &str, file: Option<&str>) -> ContactList {
    ContactList {
        name: name.to_string(),
        csv_file_name: file.map(str::to_string),
        source: if file.is_some() {
            ListSource::CsvImport
        } else {
            ListSource::Manual
        },
        contact_count: 1,
        description: None,
    }
}

fn sample_contacts() -> Vec<CandidateContact> {
    vec![CandidateContact {
        email: Some("ada@engines.dev".to_string()),
        first_name: Some("Ada".to_string()),
        status: ContactStatus::Contacted,
        ..CandidateContact::default()
    }]
}

fn exercise_repository(repository: &mut dyn ContactRepository) {
    assert!(repository.list_summaries().expect("summaries").is_empty());

    let stored = repository
        .save_list(sample_list("batch_17/11/2025", Some("batch.csv")), sample_contacts())
        .expect("save");
    assert!(!stored.id.is_empty());
    assert!(!stored.created_at.is_empty());
    assert_eq!(stored.contacts.len(), 1);
    assert!(!stored.contacts[0].id.is_empty());

    let summaries = repository.list_summaries().expect("summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "batch_17/11/2025");
    assert_eq!(summaries[0].csv_file_name.as_deref(), Some("batch.csv"));

    // Lookup is trim- and case-insensitive.
    let loaded = repository
        .load_list("  BATCH_17/11/2025 ")
        .expect("load")
        .expect("present");
    assert_eq!(loaded.list.name, "batch_17/11/2025");
    assert_eq!(
        loaded.contacts[0].contact.email.as_deref(),
        Some("ada@engines.dev")
    );

    assert!(repository.delete_list("batch_17/11/2025").expect("delete"));
    assert!(!repository.delete_list("batch_17/11/2025").expect("delete"));
    assert_eq!(repository.load_list("batch_17/11/2025").expect("load"), None);
}

#[test]
fn memory_repository_round_trip() {
    let mut repository = MemoryRepository::new();
    exercise_repository(&mut repository);
}

#[test]
fn json_store_repository_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonStoreRepository::new(dir.path().join("store")).expect("new store");
    exercise_repository(&mut repository);
}

#[test]
fn json_store_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store");
    {
        let mut repository = JsonStoreRepository::new(&path).expect("new store");
        repository
            .save_list(sample_list("manual list", None), sample_contacts())
            .expect("save");
    }
    let reopened = JsonStoreRepository::new(&path).expect("reopen store");
    let summaries = reopened.list_summaries().expect("summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "manual list");
    assert_eq!(summaries[0].csv_file_name, None);
}

#[test]
fn json_store_skips_foreign_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonStoreRepository::new(dir.path()).expect("new store");
    std::fs::write(dir.path().join("notes.txt"), "not a list").expect("write");
    std::fs::write(dir.path().join("broken.json"), "{").expect("write");
    repository
        .save_list(sample_list("real_01/01/2024", Some("real.csv")), sample_contacts())
        .expect("save");

    let summaries = repository.list_summaries().expect("summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "real_01/01/2024");
}
