//! Calendar arithmetic: leap years, day-of-year ordinals, and the day/year
//! rollover used when a drag carries the date past a year boundary.
//!
//! Gregorian only. Day-of-year is 1-based.

use crate::date::CalendarDate;

/// Gregorian leap rule: divisible by 4, not by 100, unless also by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// 1 for January 1st, up to 365/366 for December 31st.
pub fn day_of_year(date: &CalendarDate) -> u32 {
    date.ordinal()
}

/// Inverse of [`day_of_year`].
///
/// Days outside `1..=days_in_year(year)` roll into the adjacent year(s):
/// `0` is December 31st of the previous year, `days_in_year(year) + 1` is
/// January 1st of the next.
///
/// # Panics
///
/// If the rolled-over year is outside the range chrono can represent.
pub fn date_from_day_of_year(day: i64, year: i32) -> CalendarDate {
    let (ordinal, year) = normalize_ordinal(day, year);
    CalendarDate::from_ordinal(year, ordinal)
}

/// Integer rollover: returns `(day, year)` with `1 <= day <= days_in_year(year)`.
pub fn normalize_ordinal(mut day: i64, mut year: i32) -> (u32, i32) {
    while day > i64::from(days_in_year(year)) {
        day -= i64::from(days_in_year(year));
        year += 1;
    }
    while day <= 0 {
        year -= 1;
        day += i64::from(days_in_year(year));
    }
    (day as u32, year)
}

/// Fractional rollover: returns `(day, year)` with `0 < day <= days_in_year(year)`.
///
/// Subtracting from/adding to the adjacent year's length keeps leap years
/// straight when borrowing backwards: `0.0` in 2025 becomes `366.0` in 2024.
pub fn normalize_day(mut day: f64, mut year: i32) -> (f64, i32) {
    assert!(day.is_finite(), "day offset must be finite, got {day}");
    while day > f64::from(days_in_year(year)) {
        day -= f64::from(days_in_year(year));
        year += 1;
    }
    while day <= 0.0 {
        year -= 1;
        day += f64::from(days_in_year(year));
    }
    (day, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn leap_rule_century_exceptions() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn first_and_last_day() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            let first = date_from_day_of_year(1, year);
            assert_eq!((first.year(), first.month(), first.day()), (year, 1, 1));

            let last = date_from_day_of_year(i64::from(days_in_year(year)), year);
            assert_eq!((last.year(), last.month(), last.day()), (year, 12, 31));
        }
    }

    #[test]
    fn day_zero_rolls_back_to_december_31st() {
        let date = date_from_day_of_year(0, 2025);
        assert_eq!((date.year(), date.month(), date.day()), (2024, 12, 31));
        assert_eq!(day_of_year(&date), 366);
    }

    #[test]
    fn day_past_end_rolls_forward() {
        let date = date_from_day_of_year(367, 2024);
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 1));

        let date = date_from_day_of_year(365 + 366 + 1, 2023);
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 1));
    }

    #[test]
    fn fractional_rollover_uses_previous_year_length() {
        let (day, year) = normalize_day(0.0, 2025);
        assert_eq!(year, 2024);
        assert_eq!(day, 366.0);

        let (day, year) = normalize_day(-0.25, 2024);
        assert_eq!(year, 2023);
        assert_eq!(day, 364.75);

        let (day, year) = normalize_day(366.5, 2024);
        assert_eq!(year, 2025);
        assert_eq!(day, 0.5);
    }

    #[test]
    fn in_range_day_is_untouched() {
        assert_eq!(normalize_day(166.0, 2023), (166.0, 2023));
        assert_eq!(normalize_ordinal(366, 2024), (366, 2024));
    }

    proptest! {
        #[test]
        fn prop_days_in_year_matches_leap_rule(year in -4000i32..4000) {
            let expected = if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) { 366 } else { 365 };
            prop_assert_eq!(days_in_year(year), expected);
            prop_assert_eq!(is_leap_year(year), NaiveDate::from_ymd_opt(year, 2, 29).is_some());
        }

        #[test]
        fn prop_day_of_year_round_trip(year in 1i32..3000, seed in 0u32..366) {
            let day = seed % days_in_year(year) + 1;
            let date = date_from_day_of_year(i64::from(day), year);
            prop_assert_eq!(date.year(), year);
            prop_assert_eq!(day_of_year(&date), day);
        }

        #[test]
        fn prop_normalized_day_in_range(day in -2000.0f64..2000.0, year in 1900i32..2100) {
            let (day, year) = normalize_day(day, year);
            prop_assert!(day > 0.0);
            prop_assert!(day <= f64::from(days_in_year(year)));
        }

        #[test]
        fn prop_normalized_ordinal_in_range(day in -2000i64..2000, year in 1900i32..2100) {
            let (day, year) = normalize_ordinal(day, year);
            prop_assert!(day >= 1);
            prop_assert!(day <= days_in_year(year));
        }
    }
}
