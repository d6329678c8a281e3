//! Horizontal layout shared by the SVG and HTML timelines.

use chrono::{Datelike, Months, NaiveDate};

use cohortplan_core::Schedule;

/// Date-to-pixel mapping of a timeline
#[derive(Clone, Copy, Debug)]
pub(crate) struct TimelineLayout {
    /// Left edge of the visible range (one day before the first segment)
    pub start: NaiveDate,
    /// Right edge of the visible range (one day after the last finish)
    pub end: NaiveDate,
    /// X coordinate of `start`
    pub left: f64,
    pub px_per_day: f64,
}

impl TimelineLayout {
    /// Tight range around the schedule's segments; `None` when there are none
    pub fn new(schedule: &Schedule, left: f64, width: u32) -> Option<Self> {
        let start = schedule.start()? - chrono::Duration::days(1);
        let end = schedule.end()? + chrono::Duration::days(1);
        let days = (end - start).num_days().max(1) as f64;
        Some(Self {
            start,
            end,
            left,
            px_per_day: f64::from(width) / days,
        })
    }

    pub fn x(&self, date: NaiveDate) -> f64 {
        self.left + (date - self.start).num_days() as f64 * self.px_per_day
    }

    /// Width of `[from, to)` in pixels
    pub fn width(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        (to - from).num_days() as f64 * self.px_per_day
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// First day of every month inside the range
    pub fn month_starts(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let Some(mut current) = self.start.with_day(1) else {
            return months;
        };
        if current < self.start {
            current = match current.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => return months,
            };
        }
        while current <= self.end {
            months.push(current);
            match current.checked_add_months(Months::new(1)) {
                Some(next) => current = next,
                None => break,
            }
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortplan_core::ScheduledSegment;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(start: NaiveDate, finish: NaiveDate) -> Schedule {
        Schedule::new(
            "T",
            vec![ScheduledSegment {
                cohort_id: "A".into(),
                task_label: "M1: M1".into(),
                start_date: start,
                finish_date: finish,
                resource_tag: "M1".into(),
                display_color: "#1f77b4".into(),
            }],
        )
    }

    #[test]
    fn pads_range_by_one_day() {
        let layout = TimelineLayout::new(&schedule(date(2026, 8, 24), date(2026, 8, 27)), 0.0, 500)
            .unwrap();
        assert_eq!(layout.start, date(2026, 8, 23));
        assert_eq!(layout.end, date(2026, 8, 28));
        assert!((layout.px_per_day - 100.0).abs() < f64::EPSILON);
        assert!((layout.x(date(2026, 8, 24)) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_schedule_has_no_layout() {
        assert!(TimelineLayout::new(&Schedule::default(), 0.0, 500).is_none());
    }

    #[test]
    fn month_starts_inside_range() {
        let layout = TimelineLayout::new(&schedule(date(2026, 8, 24), date(2026, 11, 3)), 0.0, 500)
            .unwrap();
        assert_eq!(
            layout.month_starts(),
            vec![date(2026, 9, 1), date(2026, 10, 1), date(2026, 11, 1)]
        );
    }
}
