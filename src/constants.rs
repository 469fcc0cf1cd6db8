/// Fixed file names and marker phrases shared across the pipeline.
/// Anything a deployment may want to change is surfaced through `Config`;
/// these are the defaults it falls back to.

// Input / output defaults
pub const DEFAULT_INPUT_FILE: &str = "Сведения о членах НКО ПОВС Парус на 01.12.2025.xls";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const COMPLETE_OUTPUT_FILE: &str = "members_complete.json";
pub const SEARCH_OUTPUT_FILE: &str = "members_search.json";

// Status labels shown on the public directory
pub const ACTIVE_STATUS_TEXT: &str = "Действующий член НКО ПОВС \"ПАРУС\"";
pub const INACTIVE_STATUS_TEXT: &str = "Исключен из членов НКО ПОВС \"Парус\"";

/// First-column phrases (lowercase) that open the excluded-members section.
pub const SEPARATOR_MARKERS: &[&str] = &["исключенные", "добровольно", "выбывшие"];

/// Lowercase name fragments that mark an individual entrepreneur.
pub const IE_MARKERS: &[&str] = &["ип ", "индивидуальный предприниматель"];

/// Lowercase name fragments that mark a legal entity.
pub const COMPANY_MARKERS: &[&str] = &[
    "ооо",
    "общество с ограниченной ответственностью",
    "limited",
    "ltd",
    "corporation",
    "акционерное общество",
    "ао ",
];

// Short-name building
pub const COMPANY_PREFIX: &str = "ООО";
pub const IE_PREFIX: &str = "ИП";
pub const COMPANY_PREFIX_WINDOW: usize = 30;
pub const SHORT_NAME_MAX_CHARS: usize = 60;

/// Positional column layout of the member sheet.
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const INN: usize = 2;
    pub const ADDRESS: usize = 3;
    pub const ACTIVITY: usize = 4;
    pub const INTERESTS: usize = 5;
}

pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendering of date cells read from a workbook.
pub const CELL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
