use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::constants::CELL_DATETIME_FORMAT;
use crate::error::{ExportError, Result};
use crate::types::{Cell, RawRow, RawTable};

/// Input formats the loader understands, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") | Some("txt") => InputFormat::Csv,
            _ => InputFormat::Spreadsheet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub sheet: Option<String>,
    pub csv_delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            csv_delimiter: b',',
        }
    }
}

/// Read the whole input into an ordered table of untyped cells. No header row
/// is assumed; row and column positions match the source sheet.
#[instrument(skip(options), fields(path = %path.display()))]
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<RawTable> {
    let rows = match InputFormat::from_path(path) {
        InputFormat::Csv => load_csv(path, options.csv_delimiter)?,
        InputFormat::Spreadsheet => load_spreadsheet(path, options.sheet.as_deref())?,
    };

    info!("Loaded {} rows", rows.len());
    Ok(RawTable {
        source: path.to_string_lossy().to_string(),
        rows,
    })
}

fn load_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();
    debug!("Workbook sheets: {:?}", sheet_names);

    let range = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(ExportError::MissingSheet(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExportError::EmptyWorkbook(path.display().to_string()))??,
    };

    Ok(range_to_rows(&range))
}

/// calamine trims leading empty rows and columns off a range; pad them back so
/// column 0 is always sheet column A.
fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let (row_offset, col_offset) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Vec::new(),
    };

    let mut rows = Vec::with_capacity(row_offset + range.height());
    rows.extend((0..row_offset).map(|_| RawRow::default()));

    for sheet_row in range.rows() {
        let mut cells = Vec::with_capacity(col_offset + sheet_row.len());
        cells.extend((0..col_offset).map(|_| Cell::Empty));
        cells.extend(sheet_row.iter().map(cell_from_data));
        rows.push(RawRow::new(cells));
    }
    rows
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => cell_from_datetime(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

/// Dates become `YYYY-MM-DD HH:MM:SS` text. Durations and serials outside the
/// calendar stay numeric.
fn cell_from_datetime(dt: &ExcelDateTime) -> Cell {
    if dt.is_duration() {
        return Cell::Float(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(value) => Cell::Text(value.format(CELL_DATETIME_FORMAT).to_string()),
        None => Cell::Float(dt.as_f64()),
    }
}

fn load_csv(path: &Path, delimiter: u8) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().collect::<RawRow>());
    }
    Ok(rows)
}
