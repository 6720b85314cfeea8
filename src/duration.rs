//! duration.rs
//!
//! Calendar-aware duration between two dates, rendered in the format:
//!     "X years, Y months" (or "Y months, Z days" within the first year)
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement it manually: count the whole months that
//! have fully elapsed, re-anchor the start date just past them (clamping the
//! day-of-month, so Jan 31 + 1 month lands on Feb 28/29), and read the
//! leftover days off the calendar.
//!
//! This logic correctly handles:
//!   • month-end starts (day 29–31) against shorter target months
//!   • the December→January year boundary
//!   • leap years and varying month lengths

use chrono::{Datelike, NaiveDate};

use crate::range::RangeError;

/// Elapsed time between two dates, decomposed for display. `months` is
/// always in 0..=11; `days` is kept only while `years` is zero, because the
/// rendered phrase drops day granularity once a full year has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Duration {
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Computes the calendar duration from `start` to `end`.
///
/// Fails fast on `start > end` rather than clamping; a reversed range is a
/// data error and must never render as a plausible-looking phrase.
pub fn compute_duration(start: NaiveDate, end: NaiveDate) -> Result<Duration, RangeError> {
    if start > end {
        return Err(RangeError { start, end });
    }

    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

    // The final month only counts as whole once the start's day has been
    // reached. With start ≤ end this can never drive `months` negative.
    if end.day() < start.day() {
        months -= 1;
    }

    let years = months / 12;
    let months = months % 12;

    // Re-anchor the start just past the counted years and months; whatever
    // remains to `end` is the day component. The re-anchored date can never
    // pass `end`, so the day count stays non-negative.
    let anchor = add_months(start, years * 12 + months);
    let days = (end - anchor).num_days() as u32;

    // Day granularity is suppressed after the first full year.
    let days = if years > 0 { 0 } else { days };

    Ok(Duration {
        years: years as u32,
        months: months as u32,
        days,
    })
}

/// Advances a date by a number of whole months, clamping the day-of-month
/// to the length of the target month (Jan 31 + 1 month = Feb 28/29).
fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Renders a duration as a comma-joined English phrase, listing only the
/// non-zero components: "1 year, 3 months", "1 month, 1 day". A zero
/// duration gets a fixed fallback instead of an empty string.
pub fn format_duration(d: &Duration) -> String {
    if d.is_zero() {
        return "Less than a month".to_string();
    }

    let mut parts = Vec::new();
    if d.years > 0 {
        parts.push(format!("{} year{}", d.years, plural(d.years)));
    }
    if d.months > 0 {
        parts.push(format!("{} month{}", d.months, plural(d.months)));
    }
    if d.days > 0 {
        parts.push(format!("{} day{}", d.days, plural(d.days)));
    }

    parts.join(", ")
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn duration(start: (i32, u32, u32), end: (i32, u32, u32)) -> Duration {
        compute_duration(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
    }

    #[test]
    fn same_date_is_zero() {
        let d = duration((2022, 3, 1), (2022, 3, 1));
        assert!(d.is_zero());
        assert_eq!(format_duration(&d), "Less than a month");
    }

    #[test]
    fn exact_year() {
        let d = duration((2022, 3, 1), (2023, 3, 1));
        assert_eq!(
            d,
            Duration {
                years: 1,
                months: 0,
                days: 0
            }
        );
        assert_eq!(format_duration(&d), "1 year");
    }

    #[test]
    fn day_borrow_over_february() {
        // Jan 31 + 1 month clamps to Feb 28 (2022), leaving one day to Mar 1.
        let d = duration((2022, 1, 31), (2022, 3, 1));
        assert_eq!(
            d,
            Duration {
                years: 0,
                months: 1,
                days: 1
            }
        );
        assert_eq!(format_duration(&d), "1 month, 1 day");
    }

    #[test]
    fn day_borrow_over_leap_february() {
        // Same shape in a leap year: Jan 31 + 1 month clamps to Feb 29.
        let d = duration((2024, 1, 31), (2024, 3, 1));
        assert_eq!(
            d,
            Duration {
                years: 0,
                months: 1,
                days: 1
            }
        );
    }

    #[test]
    fn month_end_start_against_a_shorter_month() {
        // Oct 31 + 1 month clamps to Nov 30; the day count must stay small
        // and non-negative, never wrap.
        let d = duration((2022, 10, 31), (2022, 12, 1));
        assert_eq!(
            d,
            Duration {
                years: 0,
                months: 1,
                days: 1
            }
        );
    }

    #[test]
    fn day_borrow_across_year_boundary_uses_december() {
        // End in January: the borrowed month is the previous December (31
        // days), not January itself.
        let d = duration((2021, 12, 15), (2022, 1, 10));
        assert_eq!(
            d,
            Duration {
                years: 0,
                months: 0,
                days: 26
            }
        );
        assert_eq!(format_duration(&d), "26 days");
    }

    #[test]
    fn days_suppressed_after_a_year() {
        let d = duration((2022, 3, 10), (2023, 6, 25));
        assert_eq!(
            d,
            Duration {
                years: 1,
                months: 3,
                days: 0
            }
        );
        assert_eq!(format_duration(&d), "1 year, 3 months");
    }

    #[test]
    fn pluralization_is_per_component() {
        let d = Duration {
            years: 2,
            months: 1,
            days: 0,
        };
        assert_eq!(format_duration(&d), "2 years, 1 month");
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = compute_duration(date(2023, 1, 1), date(2022, 1, 1)).unwrap_err();
        assert_eq!(err.start, date(2023, 1, 1));
        assert_eq!(err.end, date(2022, 1, 1));
    }

    #[test]
    fn components_stay_in_bounds() {
        let starts = [
            (2020, 2, 29),
            (2021, 12, 31),
            (2022, 1, 1),
            (2022, 1, 31),
            (2022, 3, 1),
            (2022, 7, 15),
            (2022, 10, 31),
        ];
        let ends = [
            (2022, 3, 1),
            (2022, 12, 1),
            (2022, 12, 31),
            (2023, 1, 1),
            (2024, 2, 29),
            (2026, 8, 29),
        ];
        for s in starts {
            for e in ends {
                let (start, end) = (date(s.0, s.1, s.2), date(e.0, e.1, e.2));
                if start > end {
                    continue;
                }
                let d = compute_duration(start, end).unwrap();
                assert!(d.months <= 11, "{start} → {end}: months = {}", d.months);
                assert!(d.days <= 31, "{start} → {end}: days = {}", d.days);
                assert!(
                    d.years == 0 || d.days == 0,
                    "{start} → {end}: days shown alongside years"
                );
            }
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2022, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2022, 4), 30);
        assert_eq!(days_in_month(2022, 12), 31);
    }
}
