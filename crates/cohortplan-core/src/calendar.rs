//! Off-days calendar
//!
//! A school year's non-instructional dates: statutory holidays and
//! pedagogical days. Weekends are never stored here; they are always
//! excluded by [`OffDaysCalendar::is_business_day`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Why a date carries no instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffDayKind {
    Holiday,
    PedagogicalDay,
}

impl std::fmt::Display for OffDayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffDayKind::Holiday => write!(f, "Holiday"),
            OffDayKind::PedagogicalDay => write!(f, "Pedagogical day"),
        }
    }
}

/// Immutable set of off-days for one school year
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffDaysCalendar {
    holidays: BTreeSet<NaiveDate>,
    pedagogical_days: BTreeSet<NaiveDate>,
}

impl OffDaysCalendar {
    /// Build the calendar from a holiday list and a pedagogical-day list
    pub fn new(
        holidays: impl IntoIterator<Item = NaiveDate>,
        pedagogical_days: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
            pedagogical_days: pedagogical_days.into_iter().collect(),
        }
    }

    /// Calendar with no off-days (weekends still excluded)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_off_day(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date) || self.pedagogical_days.contains(&date)
    }

    /// A date eligible for instruction: a weekday that is not an off-day
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.is_off_day(date)
    }

    /// Kind of off-day, holidays taking precedence when listed twice
    pub fn kind_of(&self, date: NaiveDate) -> Option<OffDayKind> {
        if self.holidays.contains(&date) {
            Some(OffDayKind::Holiday)
        } else if self.pedagogical_days.contains(&date) {
            Some(OffDayKind::PedagogicalDay)
        } else {
            None
        }
    }

    /// First business day on or after `date`
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            current += chrono::Duration::days(1);
        }
        current
    }

    /// Business days in `[start, end)`
    pub fn business_days_in(&self, start: NaiveDate, end: NaiveDate) -> usize {
        let mut count = 0;
        let mut current = start;
        while current < end {
            if self.is_business_day(current) {
                count += 1;
            }
            current += chrono::Duration::days(1);
        }
        count
    }

    /// All off-days in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, OffDayKind)> + '_ {
        let mut days: Vec<(NaiveDate, OffDayKind)> = self
            .pedagogical_days
            .iter()
            .filter(|d| !self.holidays.contains(d))
            .map(|d| (*d, OffDayKind::PedagogicalDay))
            .chain(self.holidays.iter().map(|d| (*d, OffDayKind::Holiday)))
            .collect();
        days.sort_by_key(|(d, _)| *d);
        days.into_iter()
    }

    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }

    pub fn pedagogical_days(&self) -> impl Iterator<Item = &NaiveDate> {
        self.pedagogical_days.iter()
    }

    /// Number of distinct off-days
    pub fn len(&self) -> usize {
        self.holidays.union(&self.pedagogical_days).count()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.pedagogical_days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_never_business_days() {
        let cal = OffDaysCalendar::empty();
        // 2026-08-22 is a Saturday
        assert!(!cal.is_business_day(date(2026, 8, 22)));
        assert!(!cal.is_business_day(date(2026, 8, 23)));
        assert!(cal.is_business_day(date(2026, 8, 24)));
    }

    #[test]
    fn off_days_are_excluded() {
        // Labour Day 2026 (Monday) and a Friday pedagogical day
        let cal = OffDaysCalendar::new([date(2026, 9, 7)], [date(2026, 9, 25)]);

        assert!(!cal.is_business_day(date(2026, 9, 7)));
        assert!(!cal.is_business_day(date(2026, 9, 25)));
        assert!(cal.is_business_day(date(2026, 9, 8)));
        assert_eq!(cal.kind_of(date(2026, 9, 7)), Some(OffDayKind::Holiday));
        assert_eq!(cal.kind_of(date(2026, 9, 25)), Some(OffDayKind::PedagogicalDay));
        assert_eq!(cal.kind_of(date(2026, 9, 8)), None);
    }

    #[test]
    fn next_business_day_skips_weekend_and_holiday() {
        let cal = OffDaysCalendar::new([date(2026, 9, 7)], []);
        // Saturday 2026-09-05 -> Sunday -> Labour Day Monday -> Tuesday
        assert_eq!(cal.next_business_day(date(2026, 9, 5)), date(2026, 9, 8));
        assert_eq!(cal.next_business_day(date(2026, 9, 8)), date(2026, 9, 8));
    }

    #[test]
    fn business_days_in_range() {
        let cal = OffDaysCalendar::new([date(2026, 9, 7)], []);
        // Week of Sept 7, 2026: Monday off, Tue-Fri working
        assert_eq!(cal.business_days_in(date(2026, 9, 7), date(2026, 9, 14)), 4);
        assert_eq!(cal.business_days_in(date(2026, 9, 14), date(2026, 9, 14)), 0);
    }

    #[test]
    fn iter_is_sorted_and_deduplicated() {
        let cal = OffDaysCalendar::new(
            [date(2026, 10, 12), date(2026, 9, 7)],
            [date(2026, 9, 25), date(2026, 9, 7)],
        );
        let days: Vec<_> = cal.iter().collect();
        assert_eq!(
            days,
            vec![
                (date(2026, 9, 7), OffDayKind::Holiday),
                (date(2026, 9, 25), OffDayKind::PedagogicalDay),
                (date(2026, 10, 12), OffDayKind::Holiday),
            ]
        );
        assert_eq!(cal.len(), 3);
        assert!(!cal.is_empty());
    }
}
