use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// Fallback rate when the paper control is empty or unreadable
pub const DEFAULT_PAPER_RATE: f64 = 0.0;
/// Fallback side multiplier
pub const DEFAULT_SIDE_MULTIPLIER: f64 = 1.0;
/// Fallback copy count
pub const DEFAULT_COPY_COUNT: u32 = 1;

/// Current order selection, rebuilt from the form controls on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSelection {
    pub paper_rate: f64,
    pub side_multiplier: f64,
    pub copy_count: u32,
    pub page_count: u32,
}

impl Default for OrderSelection {
    fn default() -> Self {
        Self {
            paper_rate: DEFAULT_PAPER_RATE,
            side_multiplier: DEFAULT_SIDE_MULTIPLIER,
            copy_count: DEFAULT_COPY_COUNT,
            page_count: 0,
        }
    }
}

/// Parse a non-negative decimal from the leading numeric part of `raw`.
///
/// `"2.5"` -> 2.5, `"4 per page"` -> 4.0, `"abc"` / `"-1"` / `""` -> None.
pub fn parse_rate(raw: &str) -> Option<f64> {
    let prefix = numeric_prefix(raw.trim(), true);
    let value: f64 = prefix.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a copy count; anything below 1 or unreadable becomes 1, oversized
/// counts saturate.
pub fn parse_copies(raw: &str) -> u32 {
    let prefix = numeric_prefix(raw.trim(), false);
    match prefix.parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        _ => DEFAULT_COPY_COUNT,
    }
}

fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if allow_fraction && !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("2"), Some(2.0));
        assert_eq!(parse_rate(" 1.5 "), Some(1.5));
        assert_eq!(parse_rate("4 per page"), Some(4.0));
        assert_eq!(parse_rate(".5"), Some(0.5));
        assert_eq!(parse_rate(""), None);
        assert_eq!(parse_rate("color"), None);
        assert_eq!(parse_rate("-3"), None);
    }

    #[test]
    fn test_parse_copies() {
        assert_eq!(parse_copies("3"), 3);
        assert_eq!(parse_copies("3.7"), 3);
        assert_eq!(parse_copies("10 copies"), 10);
        assert_eq!(parse_copies("0"), 1);
        assert_eq!(parse_copies("-4"), 1);
        assert_eq!(parse_copies(""), 1);
        assert_eq!(parse_copies("many"), 1);
    }

    #[test]
    fn test_parse_copies_saturates() {
        assert_eq!(parse_copies("4294967296"), u32::MAX);
        assert_eq!(parse_copies("99999999999999999999"), u32::MAX);
        assert_eq!(parse_copies("99999999999999999999 copies"), u32::MAX);
        assert_eq!(parse_copies("-99999999999999999999"), 1);
    }
}
