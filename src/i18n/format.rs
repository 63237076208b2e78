//! Per-language date and price formatting.

use crate::i18n::Language;
use chrono::{DateTime, Datelike, Utc};

/// Currency used when a record carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Format a timestamp as a long date.
///
/// English: "January 5, 2025". Arabic: "5 يناير 2025".
pub fn format_date(lang: Language, date: &DateTime<Utc>) -> String {
    let month = lang.strings().months[date.month0() as usize];
    if lang.is_rtl() {
        format!("{} {} {}", date.day(), month, date.year())
    } else {
        format!("{} {}, {}", month, date.day(), date.year())
    }
}

/// Format a price as `<amount> <currency>`.
///
/// Whole amounts print without decimals; fractional amounts keep two.
pub fn format_price(amount: f64, currency: &str) -> String {
    let currency = match currency.trim() {
        "" => DEFAULT_CURRENCY,
        c => c,
    };
    if amount.fract() == 0.0 {
        format!("{:.0} {}", amount, currency)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

/// Truncate text to `max_chars` characters, appending `...` when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
