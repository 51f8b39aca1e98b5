//! Report period representation
//!
//! A period is a (year, zero-based month) pair exactly as entered. Month
//! indices outside 0-11 are not rejected: they roll over into neighbouring
//! years the same way calendar arithmetic does ("month 12 of 2024" is
//! January 2025).

use chrono::{Datelike, Locale, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used when neither the settings nor the environment name one
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

/// A month/year pair scoping one attendance grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Year as entered
    pub year: i32,
    /// Zero-based month index as entered (not validated)
    pub month: i32,
}

impl ReportPeriod {
    /// Create a period from a zero-based month index
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Create a period from a 1-based month number (as typed into the form)
    pub fn from_month_number(year: i32, month_number: i32) -> Self {
        Self {
            year,
            month: month_number.saturating_sub(1),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month0() as i32,
        }
    }

    /// 1-based month number as entered (may be outside 1-12)
    pub fn month_number(&self) -> i32 {
        self.month.saturating_add(1)
    }

    /// Normalize the month index into a calendar (year, month 1-12) pair
    ///
    /// Returns `None` only when the year rollover overflows `i32`.
    pub fn normalized(&self) -> Option<(i32, u32)> {
        let year = self.year.checked_add(self.month.div_euclid(12))?;
        let month = self.month.rem_euclid(12) as u32 + 1;
        Some((year, month))
    }

    /// Number of days in the (normalized) month
    ///
    /// This is "day 0 of the following month", so leap years and 30/31-day
    /// months fall out of the calendar. Years outside the range chrono can
    /// represent yield 0.
    ///
    /// Years are proleptic Gregorian exactly as written. Two-digit years are
    /// not shifted into the 1900s: February of year 0 has 29 days, not the 28
    /// of 1900.
    pub fn days_in_month(&self) -> u32 {
        let Some((year, month)) = self.normalized() else {
            return 0;
        };

        (28..=31)
            .rev()
            .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
            .unwrap_or(0)
    }

    /// Long month name in the given locale (e.g. "February", "février")
    pub fn month_name(&self, locale: Locale) -> String {
        let month = self.month.rem_euclid(12) as u32 + 1;

        // The name does not depend on the year, so format against a fixed one
        match NaiveDate::from_ymd_opt(2000, month, 1) {
            Some(date) => date.format_localized("%B", locale).to_string(),
            None => Month::try_from(month as u8)
                .map(|m| m.name().to_string())
                .unwrap_or_default(),
        }
    }

    /// Human label such as "February 2024" (year as entered)
    pub fn label(&self, locale: Locale) -> String {
        format!("{} {}", self.month_name(locale), self.year)
    }

    /// Get the next month, rolling the year over
    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Get the previous month, rolling the year over
    pub fn prev(&self) -> Self {
        self.shifted(-1)
    }

    fn shifted(&self, delta: i32) -> Self {
        match self.normalized() {
            Some((year, month)) => {
                let month0 = month as i32 - 1 + delta;
                match year.checked_add(month0.div_euclid(12)) {
                    Some(year) => Self::new(year, month0.rem_euclid(12)),
                    None => *self,
                }
            }
            None => *self,
        }
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            Some((year, month)) => write!(f, "{:04}-{:02}", year, month),
            None => write!(f, "{}/{}", self.year, self.month_number()),
        }
    }
}

/// Resolve a locale name such as "fr_FR" or "de_DE.UTF-8"
///
/// Falls back to `LC_ALL`, `LC_TIME` and `LANG`, then to [`DEFAULT_LOCALE`].
pub fn resolve_locale(preferred: Option<&str>) -> Locale {
    let from_env = ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok());

    preferred
        .map(str::to_string)
        .into_iter()
        .chain(from_env)
        .find_map(|name| parse_locale(&name))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Parse a POSIX-style locale name, ignoring any codeset or modifier suffix
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    match base.as_str() {
        "" | "C" | "POSIX" => None,
        other => Locale::try_from(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_february() {
        assert_eq!(ReportPeriod::new(2024, 1).days_in_month(), 29);
        assert_eq!(ReportPeriod::new(2023, 1).days_in_month(), 28);
        assert_eq!(ReportPeriod::new(1900, 1).days_in_month(), 28);
        assert_eq!(ReportPeriod::new(2000, 1).days_in_month(), 29);
    }

    #[test]
    fn test_small_years_are_taken_literally() {
        assert_eq!(ReportPeriod::new(0, 1).days_in_month(), 29);
        assert_eq!(ReportPeriod::new(99, 1).days_in_month(), 28);
        assert_eq!(ReportPeriod::new(4, 1).days_in_month(), 29);
    }

    #[test]
    fn test_month_lengths() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in expected.iter().enumerate() {
            assert_eq!(ReportPeriod::new(2025, month as i32).days_in_month(), *days);
        }
    }

    #[test]
    fn test_month_index_rolls_over() {
        // Month 12 is January of the following year
        assert_eq!(ReportPeriod::new(2024, 12).normalized(), Some((2025, 1)));
        // Month -1 is December of the previous year
        assert_eq!(ReportPeriod::new(2024, -1).normalized(), Some((2023, 12)));
        assert_eq!(ReportPeriod::new(2024, 13).days_in_month(), 28);
    }

    #[test]
    fn test_unrepresentable_year_has_no_days() {
        assert_eq!(ReportPeriod::new(i32::MAX, 0).days_in_month(), 0);
        assert_eq!(ReportPeriod::new(i32::MAX, 12).normalized(), None);
    }

    #[test]
    fn test_from_month_number() {
        let period = ReportPeriod::from_month_number(2024, 2);
        assert_eq!(period, ReportPeriod::new(2024, 1));
        assert_eq!(period.month_number(), 2);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(ReportPeriod::new(2024, 1).month_name(Locale::en_US), "February");
        assert_eq!(ReportPeriod::new(2024, 11).month_name(Locale::en_US), "December");
        assert_eq!(ReportPeriod::new(2024, 12).month_name(Locale::en_US), "January");
    }

    #[test]
    fn test_navigation() {
        let dec = ReportPeriod::new(2024, 11);
        assert_eq!(dec.next(), ReportPeriod::new(2025, 0));
        assert_eq!(ReportPeriod::new(2025, 0).prev(), dec);
        assert_eq!(ReportPeriod::new(2024, 14).next(), ReportPeriod::new(2025, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportPeriod::new(2024, 1).to_string(), "2024-02");
        assert_eq!(ReportPeriod::new(2024, 12).to_string(), "2025-01");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale("en_US.UTF-8"), Some(Locale::en_US));
        assert_eq!(parse_locale("fr-FR"), Some(Locale::fr_FR));
        assert_eq!(parse_locale("C"), None);
        assert_eq!(parse_locale("xx_NOPE"), None);
    }

    #[test]
    fn test_resolve_prefers_explicit_locale() {
        assert_eq!(resolve_locale(Some("de_DE")), Locale::de_DE);
    }

    #[test]
    fn test_default_locale_names_months_in_english() {
        assert_eq!(DEFAULT_LOCALE, Locale::en_US);
        assert_eq!(ReportPeriod::new(2024, 1).month_name(DEFAULT_LOCALE), "February");
    }

    #[test]
    fn test_serialization() {
        let period = ReportPeriod::new(2024, 1);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: ReportPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
