use std::ops::Range;
use tracing::{debug, info};

use crate::constants::SEPARATOR_MARKERS;
use crate::error::{ExportError, Result};
use crate::types::{RawRow, RawTable};

/// Where the member rows live inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Index of the row numbered `1`.
    pub data_start: usize,
    /// Index of the "excluded members" header row, if the sheet has one.
    pub separator: Option<usize>,
    pub total_rows: usize,
}

impl TableLayout {
    /// Rows read as active members: from the data start up to the separator.
    pub fn active_range(&self) -> Range<usize> {
        self.data_start..self.separator.unwrap_or(self.total_rows)
    }

    /// Rows read as inactive members: everything after the separator row.
    pub fn inactive_range(&self) -> Option<Range<usize>> {
        let sep = self.separator?;
        if sep + 1 < self.total_rows {
            Some(sep + 1..self.total_rows)
        } else {
            None
        }
    }
}

/// True when `s` is non-empty and made only of ASCII decimal digits.
pub fn is_decimal_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_data_start_row(row: &RawRow) -> bool {
    match row.first_text() {
        Some(text) => {
            let text = text.trim();
            is_decimal_digits(text) && text.parse::<u64>().map(|n| n == 1).unwrap_or(false)
        }
        None => false,
    }
}

/// True when the first cell announces the excluded/withdrawn members section.
pub fn is_separator_row(row: &RawRow) -> bool {
    let first = row.first_text().unwrap_or_default().to_lowercase();
    SEPARATOR_MARKERS.iter().any(|marker| first.contains(marker))
}

/// Find the first data row and the optional active/inactive separator.
///
/// Fails with `DataStartNotFound` when no row is numbered `1`; nothing
/// downstream runs in that case.
pub fn detect_structure(table: &RawTable) -> Result<TableLayout> {
    info!("Total rows in sheet: {}", table.len());

    let data_start = table
        .rows
        .iter()
        .position(is_data_start_row)
        .ok_or(ExportError::DataStartNotFound)?;
    info!("Data starts at row: {}", data_start);

    let separator = table.rows[data_start + 1..]
        .iter()
        .position(is_separator_row)
        .map(|offset| data_start + 1 + offset);
    match separator {
        Some(idx) => info!("Separator row (excluded members start): {}", idx),
        None => debug!("No separator row; all members are active"),
    }

    Ok(TableLayout {
        data_start,
        separator,
        total_rows: table.len(),
    })
}
