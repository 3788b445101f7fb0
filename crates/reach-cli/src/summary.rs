//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use reach_model::{CandidateContact, ColumnMapping, ContactField, StoredList};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_mapping(mapping: &ColumnMapping) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("CSV column")]);
    apply_table_style(&mut table);
    for field in ContactField::ALL {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(mapping.get(field).unwrap_or("-")),
        ]);
    }
    println!("{table}");
}

pub fn print_contacts(contacts: &[CandidateContact]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Company"),
        header_cell("Status"),
        header_cell("Template"),
    ]);
    apply_table_style(&mut table);
    for contact in contacts {
        table.add_row(vec![
            Cell::new(contact.display_name()),
            Cell::new(contact.email.as_deref().unwrap_or("")),
            Cell::new(contact.company.as_deref().unwrap_or("")),
            Cell::new(contact.status.label()),
            Cell::new(contact.template_title.as_deref().unwrap_or("")),
        ]);
    }
    println!("{table}");
}

pub fn print_lists(lists: &[StoredList]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Source"),
        header_cell("File"),
        header_cell("Contacts"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for stored in lists {
        table.add_row(vec![
            Cell::new(&stored.list.name),
            Cell::new(stored.list.source.as_str()),
            Cell::new(stored.list.csv_file_name.as_deref().unwrap_or("-")),
            Cell::new(stored.list.contact_count),
            Cell::new(&stored.created_at),
        ]);
    }
    println!("{table}");
}
