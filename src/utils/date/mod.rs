// Date utility functions
// Booking dates are calendar days; times of day never matter here.

use chrono::{Local, NaiveDate};

use crate::models::shop::OpeningHours;

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Earliest date the date picker should offer: the first day on or after
/// `today` that the shop is open.
pub fn earliest_bookable_date(today: NaiveDate, hours: &OpeningHours) -> NaiveDate {
    hours.next_open_day(today).unwrap_or(today)
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Supported date display formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

impl DateFormat {
    /// Parse a format preference such as "DD/MM/YYYY".
    pub fn parse(pattern: &str) -> Option<Self> {
        match pattern.trim().to_ascii_uppercase().as_str() {
            "MM/DD/YYYY" => Some(DateFormat::MonthDayYear),
            "DD/MM/YYYY" => Some(DateFormat::DayMonthYear),
            "YYYY/MM/DD" => Some(DateFormat::YearMonthDay),
            _ => None,
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::YearMonthDay => "%Y/%m/%d",
        }
    }
}

/// Format a date for confirmations and form fields.
///
/// Unknown format preferences fall back to `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let format = DateFormat::parse(date_format).unwrap_or(DateFormat::MonthDayYear);
    date.format(format.strftime()).to_string()
}

/// Parse a date typed as `YYYY-MM-DD`.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
