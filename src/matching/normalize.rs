//! Title normalization for fuzzy equality.
//!
//! Upstream titles differ in case, quote style, and whitespace between
//! endpoints. Two titles match when their normalized forms are equal.

/// Normalize a title: lowercase, trim, curly quotes to straight quotes,
/// and internal whitespace runs collapsed to a single space.
pub fn normalize_title(s: &str) -> String {
    let s = s
        .to_lowercase()
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
