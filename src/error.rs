use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Spreadsheet read failed: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Worksheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    #[error("Could not find data start row (no row numbered 1 in the first column)")]
    DataStartNotFound,
}

pub type Result<T> = std::result::Result<T, ExportError>;
