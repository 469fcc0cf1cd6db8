use crate::constants::{
    COMPANY_MARKERS, COMPANY_PREFIX, COMPANY_PREFIX_WINDOW, IE_MARKERS, IE_PREFIX,
    SHORT_NAME_MAX_CHARS,
};
use crate::types::MemberType;

/// Infer the member type from the full name. Entrepreneur markers win over
/// company markers; anything unmarked is a private person. A missing name is
/// `Unknown`.
pub fn determine_member_type(name: Option<&str>) -> MemberType {
    let name = match name {
        Some(n) => n.to_lowercase(),
        None => return MemberType::Unknown,
    };

    if IE_MARKERS.iter().any(|m| name.contains(m)) {
        MemberType::Ie
    } else if COMPANY_MARKERS.iter().any(|m| name.contains(m)) {
        MemberType::Company
    } else {
        MemberType::Person
    }
}

fn first_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Display name for the directory listing, derived from the full name.
pub fn create_short_name(full_name: &str, member_type: MemberType) -> String {
    let name = full_name.trim();
    match member_type {
        MemberType::Company => company_short_name(name),
        MemberType::Ie => ie_short_name(name),
        MemberType::Person | MemberType::Unknown => name.to_string(),
    }
}

fn company_short_name(name: &str) -> String {
    if let (Some(open), Some(close)) = (name.find('«'), name.find('»')) {
        let quoted = if close >= open {
            &name[open..close + '»'.len_utf8()]
        } else {
            ""
        };
        if first_chars(name, COMPANY_PREFIX_WINDOW).contains(COMPANY_PREFIX) {
            return format!("{} {}", COMPANY_PREFIX, quoted);
        }
        return quoted.to_string();
    }

    if name.contains('"') {
        let inner = name.split('"').nth(1).unwrap_or_default();
        if name.contains(COMPANY_PREFIX) {
            return format!("{} \"{}\"", COMPANY_PREFIX, inner);
        }
        return format!("\"{}\"", inner);
    }

    first_chars(name, SHORT_NAME_MAX_CHARS)
}

/// "ИП Фамилия Имя Отчество" becomes "ИП Фамилия И.О.".
fn ie_short_name(name: &str) -> String {
    let marker = format!("{} ", IE_PREFIX);
    if name.contains(&marker) {
        let person = name.rsplit(marker.as_str()).next().unwrap_or_default().trim();
        let parts: Vec<&str> = person.split_whitespace().collect();
        if parts.len() >= 3 {
            let initial = |s: &str| s.chars().next().map(String::from).unwrap_or_default();
            return format!(
                "{} {} {}.{}.",
                IE_PREFIX,
                parts[0],
                initial(parts[1]),
                initial(parts[2])
            );
        }
    }
    first_chars(name, SHORT_NAME_MAX_CHARS)
}
