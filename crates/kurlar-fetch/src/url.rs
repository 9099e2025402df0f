//! TCMB URL construction.

use chrono::{Datelike, NaiveDate};

/// Default base URL of the TCMB exchange rate service.
pub const BASE_URL: &str = "https://www.tcmb.gov.tr/kurlar/";

/// Builds the URL of the current day's rate sheet.
///
/// URL format: `{base}/today.xml`
///
/// Trailing slashes on `base` are collapsed so exactly one separates it from
/// the file name.
///
/// # Example
///
/// ```
/// use kurlar_fetch::url::today_url;
///
/// assert_eq!(
///     today_url("https://www.tcmb.gov.tr/kurlar/"),
///     "https://www.tcmb.gov.tr/kurlar/today.xml"
/// );
/// ```
#[must_use]
pub fn today_url(base: &str) -> String {
    format!("{}/today.xml", base.trim_end_matches('/'))
}

/// Builds the URL of the archived rate sheet for `date`.
///
/// URL format: `{base}/{YYYY}{MM}/{DD}{MM}{YYYY}.xml`
///
/// The calendar fields of `date` are used as-is; no timezone conversion
/// takes place.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kurlar_fetch::url::date_url;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(
///     date_url("https://www.tcmb.gov.tr/kurlar", date),
///     "https://www.tcmb.gov.tr/kurlar/202401/02012024.xml"
/// );
/// ```
#[must_use]
pub fn date_url(base: &str, date: NaiveDate) -> String {
    let (year, month, day) = (date.year(), date.month(), date.day());
    format!(
        "{}/{:04}{:02}/{:02}{:02}{:04}.xml",
        base.trim_end_matches('/'),
        year,
        month,
        day,
        month,
        year
    )
}
