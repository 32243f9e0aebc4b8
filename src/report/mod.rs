//! Plain-text report formatting helpers
//!
//! Shared by all four tools: thousands-separated counts, percentage rates,
//! section rules, and description truncation.

/// Format an integer with thousands separators (1234567 -> "1,234,567")
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a float rounded to a whole number with thousands separators
pub fn thousands_rounded(value: f64) -> String {
    thousands(value.round().max(0.0) as u64)
}

/// Format a float with two decimals and thousands separators on the
/// integer part
pub fn thousands_fixed2(value: f64) -> String {
    let whole = value.max(0.0).trunc() as u64;
    let frac = ((value.max(0.0) - value.max(0.0).trunc()) * 100.0).round() as u64;
    // Rounding the fraction can carry into the integer part
    if frac >= 100 {
        return format!("{}.00", thousands(whole + 1));
    }
    format!("{}.{:02}", thousands(whole), frac)
}

/// Format a ratio as a percentage with two decimals ("0.0523" -> "5.23%")
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Horizontal rule of the given character
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Truncate text to at most `limit` characters, appending "..." when
/// anything was cut
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut)
}
