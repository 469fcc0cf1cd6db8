use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Cell;

/// A standalone 10-digit (legal entity) or 12-digit (individual) INN.
static INN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{10}|\d{12})\b").expect("INN pattern should compile"));

/// Trim, turn line breaks into spaces, and fold double spaces once.
///
/// The fold is a single non-overlapping pass: four spaces become two, not one.
pub fn clean_str(raw: &str) -> String {
    raw.trim().replace('\n', " ").replace("  ", " ")
}

/// `clean_str` over a cell; empty cells give an empty string.
pub fn clean_text(cell: &Cell) -> String {
    cell.as_text().map(|s| clean_str(&s)).unwrap_or_default()
}

/// First standalone 10- or 12-digit run in the text, or the trimmed text
/// itself when there is none.
pub fn extract_inn_str(text: &str) -> String {
    match INN_PATTERN.captures(text) {
        Some(caps) => caps[1].to_string(),
        None => text.trim().to_string(),
    }
}

pub fn extract_inn(cell: &Cell) -> String {
    cell.as_text()
        .map(|s| extract_inn_str(&s))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_trims_and_joins_lines() {
        assert_eq!(clean_str("  ООО «Ромашка»\n"), "ООО «Ромашка»");
        assert_eq!(clean_str("г. Москва,\nул. Ленина"), "г. Москва, ул. Ленина");
        assert_eq!(clean_text(&Cell::Empty), "");
        assert_eq!(clean_text(&Cell::Int(42)), "42");
    }

    #[test]
    fn test_clean_text_single_pass_space_fold() {
        assert_eq!(clean_str("a  b"), "a b");
        assert_eq!(clean_str("a    b"), "a  b");
        assert_eq!(clean_str("a   b"), "a  b");
        // "\n " becomes two spaces and folds to one
        assert_eq!(clean_str("a\n b"), "a b");
    }

    #[test]
    fn test_extract_inn_finds_ten_and_twelve_digits() {
        assert_eq!(extract_inn_str("1234567890"), "1234567890");
        assert_eq!(extract_inn_str("ИНН 771234567890, ОГРН 1027700132195"), "771234567890");
        assert_eq!(extract_inn_str("ИНН/КПП 7701234567/770101001"), "7701234567");
    }

    #[test]
    fn test_extract_inn_ignores_embedded_runs() {
        // 11 and 13 digit runs are not INNs
        assert_eq!(extract_inn_str(" 12345678901 "), "12345678901");
        assert_eq!(extract_inn_str("1234567890123"), "1234567890123");
    }

    #[test]
    fn test_extract_inn_falls_back_to_trimmed_text() {
        assert_eq!(extract_inn_str("  нет данных "), "нет данных");
        assert_eq!(extract_inn(&Cell::Empty), "");
        assert_eq!(extract_inn(&Cell::Float(7710140679.0)), "7710140679");
    }
}
