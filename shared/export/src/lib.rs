mod spreadsheet;
mod table;

pub use spreadsheet::{export_csv, export_file_name, write_csv, write_json, ExportError};
pub use table::{render_preview, render_table};
