//! Maps bare A-share codes to exchange-suffixed provider symbols.

pub const SHANGHAI_SUFFIX: &str = ".SS";
pub const SHENZHEN_SUFFIX: &str = ".SZ";

const SHANGHAI_PREFIXES: [&str; 4] = ["600", "601", "603", "605"];
const SHENZHEN_PREFIXES: [&str; 5] = ["000", "001", "002", "300", "301"];

/// Resolve a free-form instrument code into the symbol the price provider expects.
///
/// Already-suffixed input is uppercased; six-digit Shanghai/Shenzhen codes gain
/// their exchange suffix; anything else passes through with whitespace removed.
pub fn resolve(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_exchange_suffix(trimmed) {
        return trimmed.to_uppercase();
    }

    let cleaned: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if !is_six_digit_code(&cleaned) {
        return cleaned;
    }

    if SHANGHAI_PREFIXES.iter().any(|p| cleaned.starts_with(p)) {
        format!("{}{}", cleaned, SHANGHAI_SUFFIX)
    } else if SHENZHEN_PREFIXES.iter().any(|p| cleaned.starts_with(p)) {
        format!("{}{}", cleaned, SHENZHEN_SUFFIX)
    } else {
        cleaned
    }
}

fn has_exchange_suffix(symbol: &str) -> bool {
    let upper = symbol.to_ascii_uppercase();
    upper.ends_with(SHANGHAI_SUFFIX) || upper.ends_with(SHENZHEN_SUFFIX)
}

fn is_six_digit_code(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit())
}
