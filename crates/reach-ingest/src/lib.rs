pub mod csv_table;

pub use csv_table::{CsvTable, ParseError, detect_delimiter, parse, parse_line, read_csv_file};
