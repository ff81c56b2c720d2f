//! Period selection and calendar date-range resolution.
//!
//! The chart panel bounds every historical price query by a calendar window
//! derived from the active [`Period`]. Resolution is a pure function of the
//! period and the current date, so the windowing logic is testable without
//! touching the system clock.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Aggregation window selector for the displayed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Daily view. Resolves to the current week's bounds; the day selector
    /// has always shared the weekly window and callers depend on the two
    /// being identical.
    Day,
    /// Weekly view: current week, Sunday through Saturday.
    Week,
    /// Monthly view: current calendar month.
    #[default]
    Month,
}

impl Period {
    /// Get the lowercase tag for this period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Infallible;

    /// Parse a period tag. Unrecognized values fall back to [`Period::Month`],
    /// the same fallback the range resolver applies.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "day" => Self::Day,
            "week" => Self::Week,
            _ => Self::Month,
        })
    }
}

/// An inclusive calendar date range bounding a historical price query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the window (inclusive).
    pub from: NaiveDate,
    /// Last date of the window (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a range from explicit bounds.
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Resolve the query window for `period` as of today (UTC).
    #[must_use]
    pub fn resolve(period: Period) -> Self {
        Self::for_period(period, Utc::now().date_naive())
    }

    /// Resolve the query window for `period` as of `today`.
    ///
    /// `Day` and `Week` both resolve to the week containing `today`;
    /// `Month` resolves to the month containing `today`. The result always
    /// satisfies `from <= to`.
    #[must_use]
    pub fn for_period(period: Period, today: NaiveDate) -> Self {
        match period {
            Period::Day | Period::Week => Self::week_of(today),
            Period::Month => Self::month_of(today),
        }
    }

    /// The week containing `date`, Sunday through Saturday.
    #[must_use]
    pub fn week_of(date: NaiveDate) -> Self {
        let week = date.week(Weekday::Sun);
        Self::new(week.first_day(), week.last_day())
    }

    /// The calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self::new(first, last)
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let range = DateRange::for_period(Period::Month, date(2024, 2, 14));
        assert_eq!(range.from, date(2024, 2, 1));
        assert_eq!(range.to, date(2024, 2, 29));

        let range = DateRange::for_period(Period::Month, date(2023, 12, 31));
        assert_eq!(range.from, date(2023, 12, 1));
        assert_eq!(range.to, date(2023, 12, 31));
    }

    #[test]
    fn test_week_bounds() {
        // 2024-02-14 is a Wednesday; the Sunday-first week is Feb 11..17.
        let range = DateRange::for_period(Period::Week, date(2024, 2, 14));
        assert_eq!(range.from, date(2024, 2, 11));
        assert_eq!(range.to, date(2024, 2, 17));
    }

    #[test]
    fn test_day_shares_weekly_window() {
        // Known deviation carried forward: the day selector resolves to the
        // full weekly window, not a single date.
        let today = date(2024, 2, 14);
        assert_eq!(
            DateRange::for_period(Period::Day, today),
            DateRange::for_period(Period::Week, today)
        );
    }

    #[test]
    fn test_from_not_after_to() {
        for period in [Period::Day, Period::Week, Period::Month] {
            for day in 1..=31 {
                let Some(today) = NaiveDate::from_ymd_opt(2024, 1, day) else {
                    continue;
                };
                let range = DateRange::for_period(period, today);
                assert!(range.from <= range.to, "{period}: {range}");
            }
        }
    }

    #[test]
    fn test_period_parse_fallback() {
        assert_eq!("day".parse::<Period>(), Ok(Period::Day));
        assert_eq!("WEEK".parse::<Period>(), Ok(Period::Week));
        assert_eq!("month".parse::<Period>(), Ok(Period::Month));
        // Anything unrecognized resolves like month.
        assert_eq!("fortnight".parse::<Period>(), Ok(Period::Month));
    }
}
