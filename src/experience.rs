//! Headline "years of experience" figure.
//!
//! Unlike the per-role durations this counts whole months only: a month in
//! which the anchor's day-of-month has not yet been reached does not count.
//! The figure is rendered with a trailing "+" when there is a partial year
//! on top, and floors at "1" so the page never claims zero experience.

use chrono::{Datelike, NaiveDate};

use crate::range::RangeError;

/// Placeholder token replaced in the localized summary template.
pub const YEARS_TOKEN: &str = "{{years}}";

/// Computes `(years, months)` elapsed from `anchor` to `now`, counting only
/// fully completed months. Fails fast when `anchor` lies in the future.
pub fn compute_experience(anchor: NaiveDate, now: NaiveDate) -> Result<(u32, u32), RangeError> {
    if anchor > now {
        return Err(RangeError {
            start: anchor,
            end: now,
        });
    }

    let mut years = now.year() - anchor.year();
    let mut months = now.month() as i32 - anchor.month() as i32;

    // The current month only counts once the anchor's day has passed.
    if now.day() < anchor.day() {
        months -= 1;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok((years as u32, months as u32))
}

/// Display policy for the headline figure:
///   years with a partial year on top → "N+"
///   exact years → "N"
///   months only → "M+"
///   nothing elapsed yet → "1" (never "0" or "0+")
pub fn format_experience_figure(years: u32, months: u32) -> String {
    match (years, months) {
        (0, 0) => "1".to_string(),
        (0, m) => format!("{m}+"),
        (y, 0) => y.to_string(),
        (y, _) => format!("{y}+"),
    }
}

/// Substitutes the figure into a localized summary template. This is a
/// literal replacement of the first `{{years}}` occurrence, not a template
/// engine; templates carry the token at most once.
pub fn render_summary(template: &str, figure: &str) -> String {
    template.replacen(YEARS_TOKEN, figure, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ANCHOR: (i32, u32, u32) = (2022, 3, 1);

    fn experience(now: (i32, u32, u32)) -> (u32, u32) {
        let anchor = date(ANCHOR.0, ANCHOR.1, ANCHOR.2);
        compute_experience(anchor, date(now.0, now.1, now.2)).unwrap()
    }

    #[test]
    fn exact_years() {
        assert_eq!(experience((2024, 3, 1)), (2, 0));
        assert_eq!(format_experience_figure(2, 0), "2");
    }

    #[test]
    fn partial_year_gets_plus() {
        assert_eq!(experience((2024, 2, 15)), (1, 11));
        assert_eq!(format_experience_figure(1, 11), "1+");
    }

    #[test]
    fn under_a_month_floors_to_one() {
        assert_eq!(experience((2022, 3, 15)), (0, 0));
        assert_eq!(format_experience_figure(0, 0), "1");
    }

    #[test]
    fn months_only_gets_plus() {
        assert_eq!(experience((2022, 7, 20)), (0, 4));
        assert_eq!(format_experience_figure(0, 4), "4+");
    }

    #[test]
    fn partial_month_does_not_count() {
        // Anchor day 20: on the 10th of a later month that month is not done.
        let anchor = date(2022, 3, 20);
        assert_eq!(compute_experience(anchor, date(2022, 4, 10)).unwrap(), (0, 0));
        assert_eq!(compute_experience(anchor, date(2023, 3, 10)).unwrap(), (0, 11));
    }

    #[test]
    fn future_anchor_is_rejected() {
        let err = compute_experience(date(2030, 1, 1), date(2026, 8, 29)).unwrap_err();
        assert_eq!(err.start, date(2030, 1, 1));
    }

    #[test]
    fn summary_substitution_replaces_first_occurrence_only() {
        let template = "{{years}} years; token again: {{years}}";
        assert_eq!(
            render_summary(template, "3+"),
            "3+ years; token again: {{years}}"
        );
    }

    #[test]
    fn summary_without_token_is_unchanged() {
        assert_eq!(render_summary("no placeholder here", "3+"), "no placeholder here");
    }
}
