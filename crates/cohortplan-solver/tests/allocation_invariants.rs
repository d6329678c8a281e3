//! Allocation invariants
//!
//! These hold for any module sequence, start date and off-day calendar:
//! 1. Every segment starts and ends on a business day
//! 2. A segment covers exactly ceil(hours / capacity) business days
//! 3. Segments of one cohort are sequential and never overlap
//! 4. No business day between the first start and last finish is left idle
//! 5. Allocation is deterministic

use chrono::{Duration, NaiveDate};
use cohortplan_core::{Module, OffDaysCalendar, ScheduledSegment};
use cohortplan_solver::allocate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calendar() -> OffDaysCalendar {
    OffDaysCalendar::new(
        [date(2026, 9, 7), date(2026, 10, 12)],
        [date(2026, 9, 25), date(2026, 10, 23), date(2026, 8, 28)],
    )
}

fn sequence() -> Vec<Module> {
    [15, 6, 30, 1, 7, 90, 45, 13, 60]
        .into_iter()
        .enumerate()
        .map(|(i, hours)| Module::new(format!("M{}", i + 1), hours))
        .collect()
}

/// Every start date over three weeks, weekends and off-days included
fn start_dates() -> impl Iterator<Item = NaiveDate> {
    (0..21).map(|offset| date(2026, 8, 20) + Duration::days(offset))
}

fn run(start: NaiveDate, capacity: u32) -> Vec<ScheduledSegment> {
    allocate("A", &sequence(), start, capacity, &calendar()).expect("Should allocate")
}

// ============================================================================
// INVARIANT 1: Segments start and end on business days
// ============================================================================

#[test]
fn segments_start_and_end_on_business_days() {
    let off = calendar();
    for start in start_dates() {
        for segment in run(start, 6) {
            assert!(
                off.is_business_day(segment.start_date),
                "{} starts on {} (from {})",
                segment.resource_tag,
                segment.start_date,
                start
            );
            assert!(
                off.is_business_day(segment.last_day()),
                "{} ends on {} (from {})",
                segment.resource_tag,
                segment.last_day(),
                start
            );
        }
    }
}

// ============================================================================
// INVARIANT 2: Business days covered = ceil(hours / capacity)
// ============================================================================

#[test]
fn segment_length_is_ceiling_of_hours_over_capacity() {
    let off = calendar();
    let modules = sequence();
    for capacity in [1, 4, 6, 7] {
        for start in start_dates() {
            let segments = run(start, capacity);
            for (module, segment) in modules.iter().zip(&segments) {
                let expected = module.days_required(capacity) as usize;
                assert_eq!(
                    off.business_days_in(segment.start_date, segment.finish_date),
                    expected,
                    "{} at {}h/day from {}",
                    module.id,
                    capacity,
                    start
                );
            }
        }
    }
}

#[test]
fn single_module_durations() {
    let off = OffDaysCalendar::empty();
    // Monday start: 1..=6h fit in one day, 7..=12h in two, ...
    for hours in 1..=30 {
        let segments = allocate("A", &[Module::new("X", hours)], date(2026, 8, 24), 6, &off).unwrap();
        let days = off.business_days_in(segments[0].start_date, segments[0].finish_date) as i64;
        assert_eq!(days, (hours + 5) / 6, "{hours}h");
    }
}

// ============================================================================
// INVARIANT 3: Sequential, non-overlapping segments
// ============================================================================

#[test]
fn segments_never_overlap() {
    for start in start_dates() {
        let segments = run(start, 6);
        assert_eq!(segments.len(), sequence().len());
        for pair in segments.windows(2) {
            assert!(
                pair[0].finish_date <= pair[1].start_date,
                "{} finishes {} after {} starts {}",
                pair[0].resource_tag,
                pair[0].finish_date,
                pair[1].resource_tag,
                pair[1].start_date
            );
        }
    }
}

#[test]
fn segments_keep_sequence_order() {
    let segments = run(date(2026, 8, 24), 6);
    let order: Vec<&str> = segments.iter().map(|s| s.resource_tag.as_str()).collect();
    assert_eq!(order, vec!["M1", "M2", "M3", "M4", "M5", "M6", "M7", "M8", "M9"]);
}

// ============================================================================
// INVARIANT 4: No idle business day inside a cohort's schedule
// ============================================================================

#[test]
fn no_idle_business_days_without_delay() {
    let off = calendar();
    let modules = sequence();
    for start in start_dates() {
        let segments = run(start, 6);
        let first = segments.first().unwrap().start_date;
        let last = segments.last().unwrap().finish_date;
        let consumed: i64 = modules.iter().map(|m| m.days_required(6)).sum();
        assert_eq!(off.business_days_in(first, last) as i64, consumed, "from {start}");
    }
}

#[test]
fn first_segment_starts_on_next_business_day() {
    let off = calendar();
    for start in start_dates() {
        let segments = run(start, 6);
        assert_eq!(segments[0].start_date, off.next_business_day(start));
    }
}

// ============================================================================
// INVARIANT 5: Determinism
// ============================================================================

#[test]
fn allocation_is_idempotent() {
    for start in start_dates() {
        assert_eq!(run(start, 6), run(start, 6));
    }
}
