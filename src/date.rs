//! CalendarDate type — the public date representation for floem-orbital.
//!
//! Wraps a `chrono::NaiveDate` and exposes both views the picker needs:
//! `(year, month, day)` for display and `(year, day-of-year)` for the orbit.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// A Gregorian calendar date with no time-of-day or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
    /// Month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }
    /// Day of month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
    /// Day of year (1–366).
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }
    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::today()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl CalendarDate {
    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Create from a `(year, month, day)` triple. `None` if the triple is not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Create from a year and an in-range day-of-year.
    ///
    /// Use [`crate::calendar::date_from_day_of_year`] for out-of-range days.
    ///
    /// # Panics
    ///
    /// If `ordinal` is not in `1..=days_in_year(year)` or the year is outside
    /// chrono's supported range.
    pub fn from_ordinal(year: i32, ordinal: u32) -> Self {
        match NaiveDate::from_yo_opt(year, ordinal) {
            Some(date) => Self(date),
            None => panic!("day {ordinal} of year {year} is not a representable date"),
        }
    }

    /// Long form used by the readout, e.g. `June 15, 2023`.
    pub fn to_long_string(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    /// Form used by the submit notification, e.g. `June 15th, 2023`.
    pub fn to_ordinal_string(&self) -> String {
        let day = self.day();
        format!(
            "{} {}{}, {}",
            self.0.format("%B"),
            day,
            ordinal_suffix(day),
            self.year()
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_and_ordinal_agree() {
        let date = CalendarDate::from_ymd(2023, 6, 15).unwrap();
        assert_eq!(date.ordinal(), 166);
        assert_eq!(CalendarDate::from_ordinal(2023, 166), date);

        let date = CalendarDate::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(date.ordinal(), 61);
    }

    #[test]
    fn invalid_triple_is_none() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2023, 13, 1).is_none());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_some());
    }

    #[test]
    #[should_panic(expected = "not a representable date")]
    fn out_of_range_ordinal_fails_fast() {
        CalendarDate::from_ordinal(2023, 366);
    }

    #[test]
    fn long_format() {
        let date = CalendarDate::from_ymd(2023, 7, 5).unwrap();
        assert_eq!(date.to_long_string(), "July 5, 2023");
        assert_eq!(date.to_string(), "2023-07-05");
    }

    #[test]
    fn ordinal_format_suffixes() {
        let cases = [
            (1, "January 1st, 2024"),
            (2, "January 2nd, 2024"),
            (3, "January 3rd, 2024"),
            (4, "January 4th, 2024"),
            (11, "January 11th, 2024"),
            (12, "January 12th, 2024"),
            (13, "January 13th, 2024"),
            (21, "January 21st, 2024"),
            (22, "January 22nd, 2024"),
            (31, "January 31st, 2024"),
        ];
        for (day, expected) in cases {
            let date = CalendarDate::from_ymd(2024, 1, day).unwrap();
            assert_eq!(date.to_ordinal_string(), expected);
        }
    }
}
