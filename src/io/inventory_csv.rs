//! SmartExpiry inventory CSV reader and report export.
//!
//! The reader resolves required columns by header name (case-insensitive),
//! parses every row or fails the whole load, and derives the computed
//! columns against the load date. The export side serializes an arbitrary
//! column subset back to CSV; exporting the base column set and re-loading
//! it reproduces the original values.
use std::io::{self, Read};
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::data_handling::{InventoryRecord, InventoryTable};
use crate::error::ReportError;

/// Required header columns, matched case-insensitively.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Item",
    "Category",
    "Store Location",
    "Stock",
    "Expiry Date",
    "Predicted Unsold Units",
    "Discount %",
];

/// Filename of the downloadable filtered report.
pub const REPORT_FILE_NAME: &str = "SmartExpiry_Report.csv";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%b-%Y"];
const DATETIME_FORMATS: [&str; 1] = ["%Y-%m-%d %H:%M:%S"];

struct ColumnIndices {
    item: usize,
    category: usize,
    store: usize,
    stock: usize,
    expiry: usize,
    unsold: usize,
    discount: usize,
}

/// Read inventory rows from a CSV reader, deriving the computed columns
/// against `as_of`.
///
/// Any missing required column or malformed field fails the whole load with
/// a `DataFormat` error naming the row; there is no partial table.
pub fn read_inventory_csv<R: Read>(
    reader: R,
    as_of: NaiveDate,
) -> Result<InventoryTable, ReportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row = result?;
        // +2: one for the header row, one for 1-based numbering.
        records.push(parse_row(&row, &columns, row_idx + 2, as_of)?);
    }

    log::debug!("Loaded {} inventory rows (as of {})", records.len(), as_of);
    Ok(InventoryTable::new(records, as_of))
}

/// Read inventory rows from a CSV file, deriving against today's date.
pub fn read_inventory_file<P: AsRef<Path>>(path: P) -> Result<InventoryTable, ReportError> {
    read_inventory_file_as_of(path, Local::now().date_naive())
}

/// Read inventory rows from a CSV file with an explicit derivation date.
pub fn read_inventory_file_as_of<P: AsRef<Path>>(
    path: P,
    as_of: NaiveDate,
) -> Result<InventoryTable, ReportError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_inventory_csv(file, as_of)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize, ReportError> {
    find_column(headers, name).ok_or_else(|| {
        ReportError::DataFormat(format!("Missing required column '{}'", name))
    })
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices, ReportError> {
    let [item, category, store, stock, expiry, unsold, discount] = REQUIRED_COLUMNS;
    Ok(ColumnIndices {
        item: require_column(headers, item)?,
        category: require_column(headers, category)?,
        store: require_column(headers, store)?,
        stock: require_column(headers, stock)?,
        expiry: require_column(headers, expiry)?,
        unsold: require_column(headers, unsold)?,
        discount: require_column(headers, discount)?,
    })
}

fn parse_row(
    row: &StringRecord,
    columns: &ColumnIndices,
    line: usize,
    as_of: NaiveDate,
) -> Result<InventoryRecord, ReportError> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    let stock = parse_stock(field(columns.stock), line)?;
    let expiry_date = parse_expiry_date(field(columns.expiry)).ok_or_else(|| {
        ReportError::DataFormat(format!(
            "Invalid Expiry Date '{}' at row {}",
            field(columns.expiry),
            line
        ))
    })?;
    let predicted_unsold_units =
        parse_non_negative(field(columns.unsold), "Predicted Unsold Units", line)?;
    let discount_pct = parse_non_negative(field(columns.discount), "Discount %", line)?;

    Ok(InventoryRecord::new(
        field(columns.item).to_string(),
        field(columns.category).to_string(),
        field(columns.store).to_string(),
        stock,
        expiry_date,
        predicted_unsold_units,
        discount_pct,
        as_of,
    ))
}

fn parse_stock(value: &str, line: usize) -> Result<u32, ReportError> {
    value.parse::<u32>().map_err(|_| {
        ReportError::DataFormat(format!("Invalid Stock '{}' at row {}", value, line))
    })
}

fn parse_non_negative(value: &str, column: &str, line: usize) -> Result<f64, ReportError> {
    let parsed = value.parse::<f64>().map_err(|_| {
        ReportError::DataFormat(format!("Invalid {} '{}' at row {}", column, value, line))
    })?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(ReportError::DataFormat(format!(
            "Invalid {} '{}' at row {}: must be a non-negative number",
            column, value, line
        )));
    }
    Ok(parsed)
}

fn parse_expiry_date(value: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Columns available for CSV export, base and derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Item,
    Category,
    StoreLocation,
    Stock,
    ExpiryDate,
    PredictedUnsoldUnits,
    DiscountPct,
    DaysToExpiry,
    WasteRiskScore,
    SuggestedDiscount,
    DonationRecommended,
}

/// The seven base columns; exporting these and re-loading round-trips.
pub const BASE_COLUMNS: [Column; 7] = [
    Column::Item,
    Column::Category,
    Column::StoreLocation,
    Column::Stock,
    Column::ExpiryDate,
    Column::PredictedUnsoldUnits,
    Column::DiscountPct,
];

/// Column set of the downloadable filtered report.
pub const REPORT_COLUMNS: [Column; 8] = [
    Column::Item,
    Column::Category,
    Column::StoreLocation,
    Column::Stock,
    Column::ExpiryDate,
    Column::DaysToExpiry,
    Column::WasteRiskScore,
    Column::SuggestedDiscount,
];

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Item => "Item",
            Column::Category => "Category",
            Column::StoreLocation => "Store Location",
            Column::Stock => "Stock",
            Column::ExpiryDate => "Expiry Date",
            Column::PredictedUnsoldUnits => "Predicted Unsold Units",
            Column::DiscountPct => "Discount %",
            Column::DaysToExpiry => "Days to Expiry",
            Column::WasteRiskScore => "Waste Risk Score",
            Column::SuggestedDiscount => "Suggested Discount",
            Column::DonationRecommended => "Donation Recommended",
        }
    }

    fn value(&self, record: &InventoryRecord) -> String {
        match self {
            Column::Item => record.item.clone(),
            Column::Category => record.category.clone(),
            Column::StoreLocation => record.store_location.clone(),
            Column::Stock => record.stock.to_string(),
            Column::ExpiryDate => record.expiry_date.format("%Y-%m-%d").to_string(),
            Column::PredictedUnsoldUnits => record.predicted_unsold_units.to_string(),
            Column::DiscountPct => record.discount_pct.to_string(),
            Column::DaysToExpiry => record.days_to_expiry.to_string(),
            Column::WasteRiskScore => record.waste_risk.to_string(),
            Column::SuggestedDiscount => record.suggested_discount.clone(),
            Column::DonationRecommended => if record.donation_recommended {
                "Yes"
            } else {
                "No"
            }
            .to_string(),
        }
    }
}

/// Serialize the given column subset of `table` to UTF-8 CSV bytes with a
/// header row. Embedded delimiters and newlines get standard quoting.
pub fn export_csv(table: &InventoryTable, columns: &[Column]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|column| column.header()))?;
    for record in table.records() {
        writer.write_record(columns.iter().map(|column| column.value(record)))?;
    }
    writer.flush().map_err(ReportError::Io)?;
    writer
        .into_inner()
        .map_err(|err| ReportError::Io(io::Error::new(io::ErrorKind::Other, err.to_string())))
}

/// Write the exported CSV to a file.
pub fn write_report_csv<P: AsRef<Path>>(
    table: &InventoryTable,
    columns: &[Column],
    path: P,
) -> Result<(), ReportError> {
    let bytes = export_csv(table, columns)?;
    std::fs::write(path.as_ref(), bytes)?;
    log::info!(
        "Wrote {} rows to {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(())
}
