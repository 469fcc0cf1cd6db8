use serde::{Deserialize, Serialize};
use std::fmt;

/// A single untyped spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text form of the cell, `None` for an empty cell.
    ///
    /// Integral floats render without a fractional part, so a sequence number
    /// stored as `1.0` reads back as `"1"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                Some(format!("{}", *f as i64))
            }
            Cell::Float(f) => Some(f.to_string()),
            Cell::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

/// One spreadsheet row; column position carries the meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub cells: Vec<Cell>,
}

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cell at `index`; columns past the populated width read as empty.
    pub fn cell(&self, index: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.cells.get(index).unwrap_or(&EMPTY)
    }

    pub fn first_text(&self) -> Option<String> {
        self.cell(0).as_text()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|s| Cell::from(s.as_ref())).collect())
    }
}

/// Whole input sheet, in file order.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub source: String,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Company,
    Ie,
    Person,
    Unknown,
}

impl MemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::Company => "company",
            MemberType::Ie => "ie",
            MemberType::Person => "person",
            MemberType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member as published in `members_complete.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub inn: String,
    pub address: String,
    pub activity: String,
    pub interests: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
    pub status: MemberStatus,
    pub status_text: String,
    /// Present (always empty) for active members only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
    /// Present (always empty) for inactive members only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_excluded: Option<String>,
}

/// The seven fields kept in `members_search.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub inn: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
    pub status: MemberStatus,
    pub status_text: String,
}

impl From<&MemberRecord> for SearchEntry {
    fn from(m: &MemberRecord) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            short_name: m.short_name.clone(),
            inn: m.inn.clone(),
            member_type: m.member_type,
            status: m.status,
            status_text: m.status_text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_members: usize,
    pub active_members: usize,
    pub inactive_members: usize,
    pub companies: usize,
    pub individual_entrepreneurs: usize,
    pub private_persons: usize,
    pub last_updated: String,
    pub source_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteDocument {
    pub metadata: Metadata,
    pub members: Vec<MemberRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_float_renders_as_integer() {
        assert_eq!(Cell::Float(1.0).as_text().as_deref(), Some("1"));
        assert_eq!(Cell::Float(7710140679.0).as_text().as_deref(), Some("7710140679"));
        assert_eq!(Cell::Float(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Cell::Empty.as_text(), None);
    }

    #[test]
    fn test_row_cell_past_width_is_empty() {
        let row: RawRow = ["1", "Name"].into_iter().collect();
        assert_eq!(row.cell(1), &Cell::Text("Name".to_string()));
        assert!(row.cell(5).is_empty());
    }

    #[test]
    fn test_member_record_json_shape() {
        let record = MemberRecord {
            id: "3".to_string(),
            name: "Сидоров Иван".to_string(),
            short_name: "Сидоров Иван".to_string(),
            inn: String::new(),
            address: String::new(),
            activity: String::new(),
            interests: String::new(),
            member_type: MemberType::Person,
            status: MemberStatus::Inactive,
            status_text: "x".to_string(),
            date_joined: None,
            date_excluded: Some(String::new()),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "person");
        assert_eq!(value["status"], "inactive");
        assert_eq!(value["shortName"], "Сидоров Иван");
        assert_eq!(value["dateExcluded"], "");
        assert!(value.get("dateJoined").is_none());
    }
}
