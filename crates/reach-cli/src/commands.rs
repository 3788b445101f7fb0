//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use reach_core::{ContactRepository, ImportSession, JsonStoreRepository};
use reach_model::{ContactField, StoredList};

use crate::cli::{ExportArgs, ImportArgs, PreviewArgs, ShowArgs, StoreArgs};
use crate::summary::{print_contacts, print_lists, print_mapping};

fn open_store(args: &StoreArgs) -> Result<JsonStoreRepository> {
    JsonStoreRepository::new(&args.store)
        .with_context(|| format!("open store: {}", args.store.display()))
}

fn session_from_file(path: &Path, overrides: &[String]) -> Result<ImportSession> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read csv: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("csv path has no usable file name")?;
    let mut session = ImportSession::from_csv(&text, file_name)
        .with_context(|| format!("parse csv: {}", path.display()))?;
    apply_overrides(&mut session, overrides)?;
    Ok(session)
}

fn apply_overrides(session: &mut ImportSession, overrides: &[String]) -> Result<()> {
    for entry in overrides {
        let (field, header) = entry
            .split_once('=')
            .with_context(|| format!("expected FIELD=HEADER, got: {entry}"))?;
        let field: ContactField = field.parse().map_err(|error: String| anyhow!(error))?;
        session
            .override_mapping(field, header.trim())
            .with_context(|| format!("apply mapping override for {field}"))?;
    }
    Ok(())
}

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let mut session = session_from_file(&args.file, &args.map)?;
    if let Some(name) = &args.list_name {
        session = session.with_list_name(name.clone());
    }
    if let Some(description) = &args.description {
        session = session.with_description(description.clone());
    }

    let mut store = open_store(&args.store)?;
    if args.dry_run {
        let existing = store.list_summaries()?;
        let plan = session.plan_today(&existing)?;
        println!("Dry run: nothing written");
        println!("List: {}", plan.list.name);
        print_contacts(&plan.contacts);
        report_counts(plan.list.contact_count, session.row_count());
        return Ok(());
    }

    let stored = session.submit_today(&mut store)?;
    info!(
        list = %stored.list.name,
        contacts = stored.list.contact_count,
        "import complete"
    );
    println!(
        "Imported {} contacts into \"{}\"",
        stored.list.contact_count, stored.list.name
    );
    report_counts(stored.list.contact_count, session.row_count());
    Ok(())
}

fn report_counts(imported: usize, rows: usize) {
    let skipped = rows.saturating_sub(imported);
    if skipped > 0 {
        println!("Skipped {skipped} rows without contact data");
    }
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let session = session_from_file(&args.file, &args.map)?;
    println!("File: {}", session.file_name());
    println!("Rows: {}", session.row_count());
    print_mapping(session.mapping());

    let contacts: Vec<_> = session
        .preview()
        .into_iter()
        .filter(|contact| contact.has_identity())
        .take(args.limit)
        .collect();
    print_contacts(&contacts);
    println!(
        "{} of {} rows have contact data",
        session.candidate_count(),
        session.row_count()
    );
    Ok(())
}

pub fn run_lists(args: &StoreArgs) -> Result<()> {
    let store = open_store(args)?;
    let summaries = store.list_summaries()?;
    let mut lists = Vec::new();
    for summary in &summaries {
        if let Some(stored) = store.load_list(&summary.name)? {
            lists.push(stored);
        }
    }
    if lists.is_empty() {
        println!("No stored lists");
        return Ok(());
    }
    print_lists(&lists);
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    let stored = store
        .load_list(&args.name)?
        .with_context(|| format!("no stored list named \"{}\"", args.name))?;
    println!(
        "{} ({}, {} contacts)",
        stored.list.name, stored.list.source, stored.list.contact_count
    );
    if let Some(description) = &stored.list.description {
        println!("{description}");
    }
    let contacts: Vec<_> = stored
        .contacts
        .iter()
        .map(|entry| entry.contact.clone())
        .collect();
    print_contacts(&contacts);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    let stored = store
        .load_list(&args.name)?
        .with_context(|| format!("no stored list named \"{}\"", args.name))?;
    write_contacts_csv(&args.output, &stored)?;
    println!(
        "Exported {} contacts to {}",
        stored.contacts.len(),
        args.output.display()
    );
    Ok(())
}

fn write_contacts_csv(path: &Path, stored: &StoredList) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record([
        "Email",
        "First Name",
        "Last Name",
        "Company",
        "Status",
        "Message",
        "Template Title",
    ])?;
    for entry in &stored.contacts {
        let contact = &entry.contact;
        writer.write_record([
            contact.email.as_deref().unwrap_or(""),
            contact.first_name.as_deref().unwrap_or(""),
            contact.last_name.as_deref().unwrap_or(""),
            contact.company.as_deref().unwrap_or(""),
            contact.status.as_str(),
            contact.message.as_deref().unwrap_or(""),
            contact.template_title.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
