//! The fixed range of dates the dashboard exposes.

use chrono::NaiveDate;

/// First date with generated data.
pub const FIRST_DATE: &str = "2025-01-01";

/// Last date with generated data; also the default for `/api/topactions`.
pub const LAST_DATE: &str = "2025-07-26";

/// Every date from [`FIRST_DATE`] to [`LAST_DATE`] inclusive as ISO
/// `YYYY-MM-DD` strings. The range is static; it does not track the clock.
pub fn available_dates() -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid start date");
    let end = NaiveDate::from_ymd_opt(2025, 7, 26).expect("valid end date");
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect()
}
