//! Calendar month helpers for display.

use chrono::{Datelike, Local, Month};

/// English display name for a calendar month, `None` outside 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Joined display names for a month set, e.g. "September, October".
/// An empty set renders as an em dash, matching the catalog cards.
pub fn months_label(months: &[u32]) -> String {
    if months.is_empty() {
        return "\u{2014}".to_string();
    }
    months
        .iter()
        .filter_map(|&m| month_name(m))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The current calendar month (1-12), the default for the selector.
pub fn current_month() -> u32 {
    Local::now().month()
}
