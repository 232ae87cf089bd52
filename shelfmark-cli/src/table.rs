//! ASCII table rendering for catalog listings.

use shelfmark_core::catalog::Record;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Row")]
    row_section: String,
    #[tabled(rename = "Block")]
    block_number: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        let (row_section, block_number) = match record.location() {
            Some(location) => (
                location.row_section.to_string(),
                location.block_number.to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        Self {
            title: record.title().to_string(),
            author: record.author().to_string(),
            year: record.year(),
            genre: record.genre().to_string(),
            row_section,
            block_number,
        }
    }
}

/// Render records as an ASCII table with their shelf locations.
pub fn render_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let rows: Vec<RecordRow> = records.into_iter().map(RecordRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::catalog::Catalog;

    #[test]
    fn rendered_table_contains_fields_and_location() {
        let mut catalog = Catalog::new();
        catalog
            .add(Record::new("1984", "Orwell", 1949, "Dystopian"))
            .unwrap();
        let table = render_records(catalog.records());
        assert!(table.contains("1984"));
        assert!(table.contains("Orwell"));
        assert!(table.contains("1949"));
        assert!(table.contains("Dystopian"));
        assert!(table.contains("Title"));
        assert!(table.contains("Block"));
    }

    #[test]
    fn unassigned_location_renders_as_dash() {
        let record = Record::new("Draft", "Nobody", 2024, "None");
        let table = render_records([&record]);
        assert!(table.contains('-'));
    }
}
