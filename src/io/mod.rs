//! IO utilities for loading inventory data and exporting reports.

pub mod inventory_csv;

pub use inventory_csv::{
    export_csv, read_inventory_csv, read_inventory_file, read_inventory_file_as_of,
    write_report_csv, Column, BASE_COLUMNS, REPORT_COLUMNS, REPORT_FILE_NAME, REQUIRED_COLUMNS,
};
