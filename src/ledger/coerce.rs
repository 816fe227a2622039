//! Lenient coercion of raw worksheet fields into typed values.
//!
//! Policy (deliberate, load-affecting): short rows are padded with empty
//! fields, extra columns are ignored, and an amount that fails numeric parse
//! coerces to 0.0 with a warning rather than rejecting the row. Rows whose
//! date cannot be parsed are dropped with a warning; a record without a
//! calendar date cannot appear in any view.

use chrono::NaiveDate;

use crate::domain::record::STORE_DATE_FORMAT;

const FALLBACK_DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%d/%m/%Y"];

/// Parses a stored amount cell, tolerating currency symbols and grouping
/// separators. Empty cells are zero; anything else unparseable coerces to
/// zero with a warning so the remaining rows still load.
pub fn coerce_amount(raw: &str, sheet: &str) -> f64 {
    let cleaned = raw
        .trim()
        .trim_start_matches(|c: char| matches!(c, '₹' | '$' | '€' | '£' | '¥'))
        .replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(sheet, raw, "amount failed numeric parse, coerced to 0");
            0.0
        }
    }
}

/// Parses a stored date cell. `None` means the owning row must be dropped.
pub fn parse_date(raw: &str, sheet: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, STORE_DATE_FORMAT) {
        return Some(date);
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    tracing::warn!(sheet, raw, "row dropped: date failed to parse");
    None
}
