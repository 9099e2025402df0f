//! Rate text to decimal conversion.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a rate as published by TCMB into a [`Decimal`].
///
/// The bank always uses `.` as the decimal separator, so parsing never depends
/// on the host locale. Only ASCII digits, signs, `.` and an exponent marker
/// are accepted; digit separators such as `_` or `,` make the text invalid.
/// Missing, blank, or unparseable text yields [`Decimal::ZERO`].
///
/// # Example
///
/// ```
/// use kurlar_types::parse_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_rate(Some("7.8523")), Decimal::new(78523, 4));
/// assert_eq!(parse_rate(Some("  ")), Decimal::ZERO);
/// assert_eq!(parse_rate(None), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_rate(raw: Option<&str>) -> Decimal {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Decimal::ZERO;
    };

    // `Decimal::from_str` also accepts `_` separators.
    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E');
    if !text.bytes().all(allowed) {
        return Decimal::ZERO;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}
