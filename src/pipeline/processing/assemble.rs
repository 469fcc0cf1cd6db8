use tracing::trace;

use super::classify::{create_short_name, determine_member_type};
use super::normalize::{clean_text, extract_inn};
use super::structure::is_decimal_digits;
use crate::config::Config;
use crate::constants::{self, columns};
use crate::types::{MemberRecord, MemberStatus, RawRow};

/// Turns data rows into member records. Holds the per-status labels so the
/// assembled records need no further touching.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    active_status_text: String,
    inactive_status_text: String,
}

impl RecordAssembler {
    pub fn new(active_status_text: impl Into<String>, inactive_status_text: impl Into<String>) -> Self {
        Self {
            active_status_text: active_status_text.into(),
            inactive_status_text: inactive_status_text.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.active_status_text.clone(),
            config.inactive_status_text.clone(),
        )
    }

    pub fn status_text(&self, status: MemberStatus) -> &str {
        match status {
            MemberStatus::Active => &self.active_status_text,
            MemberStatus::Inactive => &self.inactive_status_text,
        }
    }

    /// Build a record from one row, or `None` when the row is not a member
    /// row: the first cell is not a plain number, or the name is blank.
    pub fn assemble(&self, row: &RawRow, status: MemberStatus) -> Option<MemberRecord> {
        let id = parse_member_id(row)?;

        let name = clean_text(row.cell(columns::NAME));
        if name.is_empty() {
            trace!(id = %id, "skipping row without a name");
            return None;
        }

        let member_type = determine_member_type(Some(&name));
        let (date_joined, date_excluded) = match status {
            MemberStatus::Active => (Some(String::new()), None),
            MemberStatus::Inactive => (None, Some(String::new())),
        };

        Some(MemberRecord {
            id,
            short_name: create_short_name(&name, member_type),
            name,
            inn: extract_inn(row.cell(columns::INN)),
            address: clean_text(row.cell(columns::ADDRESS)),
            activity: clean_text(row.cell(columns::ACTIVITY)),
            interests: clean_text(row.cell(columns::INTERESTS)),
            member_type,
            status,
            status_text: self.status_text(status).to_string(),
            date_joined,
            date_excluded,
        })
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new(constants::ACTIVE_STATUS_TEXT, constants::INACTIVE_STATUS_TEXT)
    }
}

/// The sequence number as a decimal string, via float so spreadsheet values
/// like `12.0` read as `12`. Formatted from the float itself so long digit
/// runs do not clamp to the `i64` range.
fn parse_member_id(row: &RawRow) -> Option<String> {
    let text = row.cell(columns::ID).as_text()?;
    let text = text.trim();
    if !is_decimal_digits(text) {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    Some(format!("{:.0}", value.trunc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, MemberType};

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().collect()
    }

    #[test]
    fn test_company_row() {
        let assembler = RecordAssembler::default();
        let record = assembler
            .assemble(
                &row(&["1", "ООО «Ромашка»", "1234567890", "г. Тверь", "Торговля", "Экспорт"]),
                MemberStatus::Active,
            )
            .unwrap();

        assert_eq!(record.id, "1");
        assert_eq!(record.member_type, MemberType::Company);
        assert_eq!(record.inn, "1234567890");
        assert_eq!(record.short_name, "ООО «Ромашка»");
        assert_eq!(record.address, "г. Тверь");
        assert_eq!(record.interests, "Экспорт");
        assert_eq!(record.status_text, constants::ACTIVE_STATUS_TEXT);
        assert_eq!(record.date_joined.as_deref(), Some(""));
        assert_eq!(record.date_excluded, None);
    }

    #[test]
    fn test_ie_row_with_short_width() {
        let assembler = RecordAssembler::default();
        let record = assembler
            .assemble(&row(&["2", "ИП Иванов Петр Сергеевич", ""]), MemberStatus::Inactive)
            .unwrap();

        assert_eq!(record.member_type, MemberType::Ie);
        assert_eq!(record.short_name, "ИП Иванов П.С.");
        assert_eq!(record.inn, "");
        assert_eq!(record.address, "");
        assert_eq!(record.activity, "");
        assert_eq!(record.status, MemberStatus::Inactive);
        assert_eq!(record.status_text, constants::INACTIVE_STATUS_TEXT);
        assert_eq!(record.date_excluded.as_deref(), Some(""));
        assert_eq!(record.date_joined, None);
    }

    #[test]
    fn test_rows_without_numeric_id_are_skipped() {
        let assembler = RecordAssembler::default();
        for first in ["", "№", "1.5", "-3", "Исключенные"] {
            assert!(
                assembler
                    .assemble(&row(&[first, "Петров Петр", "1234567890"]), MemberStatus::Active)
                    .is_none(),
                "row with first cell {first:?} should be skipped"
            );
        }
    }

    #[test]
    fn test_blank_name_is_skipped() {
        let assembler = RecordAssembler::default();
        assert!(assembler.assemble(&row(&["5", "   "]), MemberStatus::Active).is_none());
        assert!(assembler.assemble(&row(&["5"]), MemberStatus::Active).is_none());
    }

    #[test]
    fn test_id_drops_leading_zeros_and_float_artifacts() {
        let assembler = RecordAssembler::default();
        let record = assembler
            .assemble(&row(&[" 007 ", "Петров Петр"]), MemberStatus::Active)
            .unwrap();
        assert_eq!(record.id, "7");

        let numeric = RawRow::new(vec![Cell::Float(12.0), Cell::Text("Петров Петр".to_string())]);
        let record = assembler.assemble(&numeric, MemberStatus::Active).unwrap();
        assert_eq!(record.id, "12");
    }

    #[test]
    fn test_long_id_keeps_full_magnitude() {
        let assembler = RecordAssembler::default();
        let record = assembler
            .assemble(&row(&["99999999999999999999", "Петров Петр"]), MemberStatus::Active)
            .unwrap();
        assert_eq!(record.id, "100000000000000000000");
    }

    #[test]
    fn test_name_is_cleaned() {
        let assembler = RecordAssembler::new("on", "off");
        let record = assembler
            .assemble(&row(&["3", "  Сидоров\nИван  Ильич "]), MemberStatus::Active)
            .unwrap();
        assert_eq!(record.name, "Сидоров Иван Ильич");
        assert_eq!(record.status_text, "on");
    }
}
