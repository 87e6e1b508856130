//! Calendar utilities.
//!
//! Day counting for project ranges and months, ordinal suffixes, and month
//! selection. A working day is any Monday to Friday; there is no holiday
//! calendar.
//!
//! ## Range asymmetry
//!
//! [`total_days`] measures the absolute span, so swapping its arguments gives
//! the same count. [`working_days`] walks forward from `start`, so a reversed
//! range yields zero. Totals downstream depend on both behaviors.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::error::{SalaryError, SalaryResult};
use crate::models::MonthInfo;

/// Date format accepted by [`parse_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true for Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts calendar days between two dates, inclusive of both ends.
///
/// The span is absolute, so the result is the same whichever date comes
/// first.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::total_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(total_days(monday, friday), 5);
/// assert_eq!(total_days(friday, monday), 5);
/// ```
pub fn total_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days().unsigned_abs();
    u32::try_from(span).unwrap_or(u32::MAX).saturating_add(1)
}

/// Counts Monday to Friday days from `start` through `end` inclusive.
///
/// Returns 0 when `start` is after `end`.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::working_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(working_days(monday, sunday), 5);
/// assert_eq!(working_days(sunday, monday), 0);
/// ```
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Counts Monday to Friday days in a month.
///
/// `month0` is zero-based (January is 0). Returns `InvalidMonth` when it does
/// not name a month of `year`.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::working_days_in_month;
///
/// // January 2024 starts on a Monday and has 23 weekdays.
/// assert_eq!(working_days_in_month(2024, 0).unwrap(), 23);
/// ```
pub fn working_days_in_month(year: i32, month0: u32) -> SalaryResult<u32> {
    let first = first_of_month(year, month0)?;
    let count = first
        .iter_days()
        .take_while(|day| day.month0() == month0)
        .filter(|day| is_working_day(*day))
        .count();
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Returns the English ordinal suffix for `n` ("st", "nd", "rd", or "th").
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
pub fn ordinal_suffix(n: u32) -> &'static str {
    let last_digit = n % 10;
    let last_two = n % 100;
    match (last_digit, last_two) {
        (1, tens) if tens != 11 => "st",
        (2, tens) if tens != 12 => "nd",
        (3, tens) if tens != 13 => "rd",
        _ => "th",
    }
}

/// Formats `n` with its ordinal suffix, e.g. "2nd".
pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Builds the month information for the month containing `date`.
pub fn month_info_for_date(date: NaiveDate) -> SalaryResult<MonthInfo> {
    let working_days = working_days_in_month(date.year(), date.month0())?;
    Ok(MonthInfo {
        year: date.year(),
        month: date.month0(),
        month_name: date.format("%B %Y").to_string(),
        working_days,
    })
}

/// Builds the month information for the current local month.
pub fn current_month_info() -> SalaryResult<MonthInfo> {
    month_info_for_date(Local::now().date_naive())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::parse_date;
///
/// assert!(parse_date("2024-01-05").is_ok());
/// assert!(parse_date("05/01/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> SalaryResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| SalaryError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Parses a `YYYY-MM` month selection into its month information.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::parse_period;
///
/// let info = parse_period("2024-02").unwrap();
/// assert_eq!(info.month, 1);
/// assert_eq!(info.month_name, "February 2024");
/// assert_eq!(info.working_days, 21);
/// ```
pub fn parse_period(value: &str) -> SalaryResult<MonthInfo> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), DATE_FORMAT)
        .map_err(|e| SalaryError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        })?;
    month_info_for_date(first)
}

/// Resolves an optional `YYYY-MM` selection, defaulting to the current month.
pub fn resolve_period(value: Option<&str>) -> SalaryResult<MonthInfo> {
    match value {
        Some(period) if !period.trim().is_empty() => parse_period(period),
        _ => current_month_info(),
    }
}

/// Formats a date in long form, e.g. "January 5, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn first_of_month(year: i32, month0: u32) -> SalaryResult<NaiveDate> {
    month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .ok_or(SalaryError::InvalidMonth {
            year,
            month: month0,
        })
}
