// src/calendar.rs
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Column headers, Sunday first to match `leading_blanks`.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// `YYYY-MM-DD` key of a local calendar date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl TryFrom<String> for DateKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DateKey::parse(&s).ok_or_else(|| format!("not a YYYY-MM-DD date: {s:?}"))
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> String {
        key.0
    }
}

impl DateKey {
    pub fn of(date: NaiveDate) -> Self {
        DateKey(date.format("%Y-%m-%d").to_string())
    }

    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .map(DateKey::of)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar month, held as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn days(self) -> u32 {
        match self.next() {
            next if next != self => (next.0 - self.0).num_days() as u32,
            // December of the last representable year.
            _ => 31,
        }
    }

    /// Weekday of day 1, Sunday = 0.
    pub fn leading_blanks(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn day(self, day: u32) -> Option<NaiveDate> {
        self.0.with_day(day)
    }

    pub fn prev(self) -> Self {
        let (y, m) = match self.month() {
            1 => (self.year() - 1, 12),
            m => (self.year(), m - 1),
        };
        YearMonth::new(y, m).unwrap_or(self)
    }

    pub fn next(self) -> Self {
        let (y, m) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        YearMonth::new(y, m).unwrap_or(self)
    }

    /// e.g. "January 2024"
    pub fn title(self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
    pub key: Option<DateKey>,
    pub has_entries: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            day: None,
            date: None,
            key: None,
            has_entries: false,
            is_selected: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

/// Lay out `month` as a 7-column grid: leading blanks, then one cell per day.
pub fn build_grid<F>(month: YearMonth, has_entries: F, selected: Option<NaiveDate>) -> Vec<CalendarCell>
where
    F: Fn(&DateKey) -> bool,
{
    let blanks = month.leading_blanks() as usize;
    let selected = selected.map(DateKey::of);

    let mut cells = Vec::with_capacity(blanks + month.days() as usize);
    cells.extend(std::iter::repeat_with(CalendarCell::blank).take(blanks));

    for day in 1..=month.days() {
        let Some(date) = month.day(day) else { continue };
        let key = DateKey::of(date);
        cells.push(CalendarCell {
            day: Some(day),
            date: Some(date),
            has_entries: has_entries(&key),
            is_selected: selected.as_ref() == Some(&key),
            key: Some(key),
        });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn january_2024_layout() {
        let month = ym(2024, 1);
        // 2024-01-01 was a Monday.
        assert_eq!(month.leading_blanks(), 1);
        assert_eq!(month.days(), 31);
        assert_eq!(month.title(), "January 2024");

        let cells = build_grid(month, |_| false, None);
        assert_eq!(cells.len(), 32);
        assert!(cells[0].is_blank());
        assert_eq!(cells[1].day, Some(1));
        assert_eq!(cells[1].key.as_ref().map(DateKey::as_str), Some("2024-01-01"));
    }

    #[test]
    fn cell_count_is_blanks_plus_days() {
        let mut month = ym(2023, 1);
        for _ in 0..36 {
            let cells = build_grid(month, |_| false, None);
            let blanks = cells.iter().filter(|c| c.is_blank()).count();
            assert!(blanks <= 6);
            assert_eq!(blanks, month.leading_blanks() as usize);
            assert_eq!(cells.len(), blanks + month.days() as usize);
            assert!(cells.len() <= 42);
            month = month.next();
        }
    }

    #[test]
    fn flags_dates_present_in_schedule() {
        let scheduled = DateKey::parse("2024-01-15").unwrap();
        let cells = build_grid(ym(2024, 1), |k| *k == scheduled, None);
        let day = |d: u32| cells.iter().find(|c| c.day == Some(d)).unwrap();
        assert!(day(15).has_entries);
        assert!(!day(20).has_entries);
    }

    #[test]
    fn selection_compares_by_date_key() {
        let picked = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let cells = build_grid(ym(2024, 1), |_| false, Some(picked));
        let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].day, Some(17));

        let other_month = build_grid(ym(2024, 2), |_| false, Some(picked));
        assert!(other_month.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn leap_february() {
        assert_eq!(ym(2024, 2).days(), 29);
        assert_eq!(ym(2023, 2).days(), 28);
        assert_eq!(ym(1900, 2).days(), 28);
        assert_eq!(ym(2000, 2).days(), 29);
        assert_eq!(ym(2024, 4).days(), 30);
        assert_eq!(ym(2023, 12).days(), 31);
    }

    #[test]
    fn month_stepping_wraps_years() {
        assert_eq!(ym(2024, 1).prev(), ym(2023, 12));
        assert_eq!(ym(2023, 12).next(), ym(2024, 1));
        assert_eq!(ym(2024, 6).next().prev(), ym(2024, 6));
    }

    #[test]
    fn date_keys_reject_bad_json() {
        let ok: DateKey = serde_json::from_str(r#""2024-01-15""#).unwrap();
        assert_eq!(ok.as_str(), "2024-01-15");
        assert!(serde_json::from_str::<DateKey>(r#""15/01/2024""#).is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#""2024-01-15""#);
    }

    #[test]
    fn date_keys_normalise() {
        assert_eq!(DateKey::parse(" 2024-01-05 ").unwrap().as_str(), "2024-01-05");
        assert_eq!(DateKey::parse("2024-02-30"), None);
        assert_eq!(
            YearMonth::of(NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()),
            ym(2024, 3)
        );
    }
}
