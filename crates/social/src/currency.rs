//! Brazilian-real amounts as typed into the form and shown in reports.

/// Prefix the form shows in front of currency fields.
pub const PREFIX: &str = "R$ ";

/// Parse a typed amount: an optional literal `R$ ` prefix, then a number
/// using either `,` or `.` as the decimal mark.
///
/// Thousands separators are not accepted: `"1.234,56"` becomes
/// `"1.234.56"` and fails.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(PREFIX, "").replace(',', ".");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// `R$ 1234.50` style, two decimals, no grouping.
pub fn format_currency(value: f64) -> String {
    format!("{PREFIX}{value:.2}")
}
