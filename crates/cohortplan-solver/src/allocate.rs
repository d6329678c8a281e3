//! Business-day allocation of one cohort's module sequence.
//!
//! Each module is walked through a small state machine:
//!
//! ```text
//! SeekingBusinessDay --(business day)--> Accumulating --(hours exhausted)--> Done
//!        ^  |                               ^  |
//!        +--+ (weekend / off-day)           +--+ (next day, hours remain)
//! ```
//!
//! The cursor date is threaded explicitly from one module to the next and is
//! never reset, so a cohort's segments are sequential and never overlap. A
//! business day is attributed to exactly one module.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use cohortplan_core::{AllocationError, DelayConfig, Module, OffDaysCalendar, ScheduledSegment};

/// Allocation state of the module currently being placed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModuleState {
    /// No instructional day recorded yet
    SeekingBusinessDay { remaining: i64 },
    /// First day recorded, hours still owed
    Accumulating { start: NaiveDate, remaining: i64 },
    /// Every hour allocated; `last_day` is the final instructional day
    Done { start: NaiveDate, last_day: NaiveDate },
}

/// Where one module landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    start: NaiveDate,
    /// Exclusive end; also the cursor for the next module
    finish: NaiveDate,
}

/// Allocate a cohort's ordered modules to business days.
///
/// Every module is checked before any day is allocated: a non-positive
/// duration or a zero capacity is rejected instead of looping. An empty
/// module list yields an empty segment list.
pub fn allocate(
    cohort_id: &str,
    modules: &[Module],
    start_date: NaiveDate,
    daily_capacity_hours: u32,
    off_days: &OffDaysCalendar,
) -> Result<Vec<ScheduledSegment>, AllocationError> {
    allocate_with_delay(
        cohort_id,
        modules,
        start_date,
        daily_capacity_hours,
        off_days,
        None,
    )
}

/// [`allocate`] with an optional postponement of one designated module.
///
/// When `delay` is applied, the cursor moves forward `weeks * 7` calendar
/// days right before the designated module starts seeking its first
/// business day. Every later module shifts with it.
pub fn allocate_with_delay(
    cohort_id: &str,
    modules: &[Module],
    start_date: NaiveDate,
    daily_capacity_hours: u32,
    off_days: &OffDaysCalendar,
    delay: Option<&DelayConfig>,
) -> Result<Vec<ScheduledSegment>, AllocationError> {
    check_inputs(modules, daily_capacity_hours)?;
    let delay = delay.filter(|d| d.is_applied());

    let (segments, _cursor) = modules.iter().fold(
        (Vec::with_capacity(modules.len()), start_date),
        |(mut segments, cursor), module| {
            let cursor = match delay {
                Some(d) if d.module == module.id => {
                    debug!(cohort = cohort_id, module = %module.id, weeks = d.weeks, "applying delay");
                    cursor + Duration::days(d.gap_days())
                }
                _ => cursor,
            };

            let placement = place_module(module, cursor, daily_capacity_hours, off_days);
            debug!(
                cohort = cohort_id,
                module = %module.id,
                start = %placement.start,
                finish = %placement.finish,
                "allocated module"
            );

            segments.push(ScheduledSegment {
                cohort_id: cohort_id.to_string(),
                task_label: module.task_label(),
                start_date: placement.start,
                finish_date: placement.finish,
                resource_tag: module.id.clone(),
                display_color: module.color.clone(),
            });
            (segments, placement.finish)
        },
    );

    Ok(segments)
}

fn check_inputs(modules: &[Module], daily_capacity_hours: u32) -> Result<(), AllocationError> {
    if daily_capacity_hours == 0 {
        return Err(AllocationError::InvalidCapacity(daily_capacity_hours));
    }
    if let Some(module) = modules.iter().find(|m| m.hours_required <= 0) {
        return Err(AllocationError::NonPositiveDuration {
            module_id: module.id.clone(),
            hours: module.hours_required,
        });
    }
    Ok(())
}

/// Walk the calendar from `cursor` until the module's hours are exhausted.
///
/// Requires `hours_required > 0` and `capacity > 0`.
fn place_module(
    module: &Module,
    mut cursor: NaiveDate,
    capacity: u32,
    off_days: &OffDaysCalendar,
) -> Placement {
    let capacity = capacity as i64;
    let mut state = ModuleState::SeekingBusinessDay {
        remaining: module.hours_required,
    };

    loop {
        state = match state {
            ModuleState::SeekingBusinessDay { remaining } => {
                if off_days.is_business_day(cursor) {
                    ModuleState::Accumulating {
                        start: cursor,
                        remaining,
                    }
                } else {
                    cursor += Duration::days(1);
                    ModuleState::SeekingBusinessDay { remaining }
                }
            }
            ModuleState::Accumulating { start, remaining } => {
                if !off_days.is_business_day(cursor) {
                    cursor += Duration::days(1);
                    ModuleState::Accumulating { start, remaining }
                } else {
                    let remaining = remaining - remaining.min(capacity);
                    if remaining == 0 {
                        ModuleState::Done {
                            start,
                            last_day: cursor,
                        }
                    } else {
                        cursor += Duration::days(1);
                        ModuleState::Accumulating { start, remaining }
                    }
                }
            }
            ModuleState::Done { start, last_day } => {
                return Placement {
                    start,
                    finish: last_day + Duration::days(1),
                };
            }
        };
    }
}
