//! Period drill-down of one scheduled module.
//!
//! A business day is split into periods (P1, P2, ...) whose hours sum to the
//! daily capacity. A module's hours are poured into those periods in phase
//! order: instruction, exam, recovery, reprise. A period straddling two
//! phases yields one slot per phase.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use cohortplan_core::{
    AllocationError, Module, OffDaysCalendar, PeriodLayout, PhaseKind, Schedule,
    ScheduledSegment, TrainingPlan,
};

use crate::summary::ModuleSummary;

/// Hours of one phase taught in one period of one day
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeriodSlot {
    pub date: NaiveDate,
    /// "P1", "P2", ...
    pub period: String,
    pub hours: u32,
    pub phase: PhaseKind,
}

/// Everything shown for one module of one cohort
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleDrillDown {
    pub segment: ScheduledSegment,
    pub summary: ModuleSummary,
    pub slots: Vec<PeriodSlot>,
}

/// Split a scheduled module into period slots.
///
/// Walks the business days from the segment start until the module's hours
/// are exhausted, so the last slot falls on the segment's last day when the
/// segment came from the allocator with the same calendar and capacity.
pub fn expand_periods(
    module: &Module,
    segment: &ScheduledSegment,
    layout: &PeriodLayout,
    daily_capacity_hours: u32,
    off_days: &OffDaysCalendar,
) -> Result<Vec<PeriodSlot>, AllocationError> {
    if daily_capacity_hours == 0 {
        return Err(AllocationError::InvalidCapacity(daily_capacity_hours));
    }
    if layout.periods.is_empty()
        || layout.periods.contains(&0)
        || layout.total() != daily_capacity_hours
    {
        return Err(AllocationError::PeriodLayout {
            periods: layout.periods.clone(),
            total: layout.total(),
            capacity: daily_capacity_hours,
        });
    }
    if module.hours_required <= 0 {
        return Err(AllocationError::NonPositiveDuration {
            module_id: module.id.clone(),
            hours: module.hours_required,
        });
    }

    let mut phases = module
        .phase_hours()
        .in_order()
        .into_iter()
        .filter(|(_, hours)| *hours > 0)
        .peekable();
    let mut phase_left = phases.peek().map_or(0, |(_, hours)| *hours);

    let mut slots = Vec::new();
    let mut day = segment.start_date;
    while phases.peek().is_some() {
        if !off_days.is_business_day(day) {
            day += Duration::days(1);
            continue;
        }

        for (index, &period_hours) in layout.periods.iter().enumerate() {
            let mut period_left = period_hours;
            while period_left > 0 {
                let Some(&(phase, _)) = phases.peek() else {
                    break;
                };
                let taken = period_left.min(phase_left);
                slots.push(PeriodSlot {
                    date: day,
                    period: PeriodLayout::label(index),
                    hours: taken,
                    phase,
                });
                period_left -= taken;
                phase_left -= taken;
                if phase_left == 0 {
                    phases.next();
                    phase_left = phases.peek().map_or(0, |(_, hours)| *hours);
                }
            }
        }
        day += Duration::days(1);
    }

    Ok(slots)
}

/// Drill-down of one module for one cohort of a computed schedule
pub fn drill_down(
    plan: &TrainingPlan,
    schedule: &Schedule,
    cohort_id: &str,
    module_id: &str,
) -> Result<ModuleDrillDown, AllocationError> {
    if plan.get_cohort(cohort_id).is_none() && schedule.segments_for(cohort_id).next().is_none() {
        return Err(AllocationError::CohortNotFound(cohort_id.to_string()));
    }
    let module = plan
        .get_module(module_id)
        .ok_or_else(|| AllocationError::ModuleNotFound(module_id.to_string()))?;
    let segment = schedule
        .find(cohort_id, module_id)
        .ok_or_else(|| AllocationError::ModuleNotFound(module_id.to_string()))?;

    let slots = expand_periods(
        module,
        segment,
        &plan.periods,
        plan.daily_capacity_hours,
        &plan.off_days,
    )?;

    Ok(ModuleDrillDown {
        segment: segment.clone(),
        summary: ModuleSummary::of(module, plan.daily_capacity_hours),
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortplan_core::PhaseHours;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn segment_for(module: &Module, start: NaiveDate, off: &OffDaysCalendar) -> ScheduledSegment {
        crate::allocate("A", std::slice::from_ref(module), start, 6, off)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn splits_each_day_into_two_periods() {
        let module = Module::new("M1", 15);
        let off = OffDaysCalendar::empty();
        let segment = segment_for(&module, date(2026, 8, 24), &off);
        let slots = expand_periods(&module, &segment, &PeriodLayout::default(), 6, &off).unwrap();

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].period, "P1");
        assert_eq!(slots[1].period, "P2");
        assert_eq!(slots[4].date, segment.last_day());
        assert_eq!(slots.iter().map(|s| s.hours).sum::<u32>(), 15);
        assert!(slots.iter().all(|s| s.phase == PhaseKind::Instruction));
    }

    #[test]
    fn phases_are_consumed_in_order() {
        let module = Module::new("C2", 18).phases(PhaseHours {
            instruction: 9,
            exam: 3,
            recovery: 3,
            reprise: 3,
        });
        let off = OffDaysCalendar::empty();
        let segment = segment_for(&module, date(2026, 8, 24), &off);
        let slots = expand_periods(&module, &segment, &PeriodLayout::default(), 6, &off).unwrap();

        let phases: Vec<PhaseKind> = slots.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                PhaseKind::Instruction,
                PhaseKind::Instruction,
                PhaseKind::Instruction,
                PhaseKind::Exam,
                PhaseKind::Recovery,
                PhaseKind::Reprise,
            ]
        );
        assert_eq!(slots[3].date, date(2026, 8, 25));
        assert_eq!(slots[3].period, "P2");
    }

    #[test]
    fn straddling_period_is_split() {
        let module = Module::new("C3", 6).phases(PhaseHours {
            instruction: 4,
            exam: 2,
            recovery: 0,
            reprise: 0,
        });
        let off = OffDaysCalendar::empty();
        let segment = segment_for(&module, date(2026, 8, 24), &off);
        let slots = expand_periods(&module, &segment, &PeriodLayout::default(), 6, &off).unwrap();

        assert_eq!(slots.len(), 3);
        assert_eq!((slots[1].period.as_str(), slots[1].hours), ("P2", 1));
        assert_eq!((slots[2].period.as_str(), slots[2].phase), ("P2", PhaseKind::Exam));
    }

    #[test]
    fn skips_off_days_like_the_allocator() {
        let module = Module::new("M1", 12);
        let off = OffDaysCalendar::new([], [date(2026, 8, 28)]);
        let segment = segment_for(&module, date(2026, 8, 27), &off);
        let slots = expand_periods(&module, &segment, &PeriodLayout::default(), 6, &off).unwrap();

        let days: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        assert_eq!(
            days,
            vec![
                date(2026, 8, 27),
                date(2026, 8, 27),
                date(2026, 8, 31),
                date(2026, 8, 31)
            ]
        );
    }

    #[test]
    fn rejects_layout_not_matching_capacity() {
        let module = Module::new("M1", 12);
        let off = OffDaysCalendar::empty();
        let segment = segment_for(&module, date(2026, 8, 24), &off);
        let err = expand_periods(&module, &segment, &PeriodLayout::new(vec![3, 2]), 6, &off)
            .unwrap_err();
        assert_eq!(
            err,
            AllocationError::PeriodLayout {
                periods: vec![3, 2],
                total: 5,
                capacity: 6
            }
        );
    }

    #[test]
    fn drill_down_reports_missing_module() {
        let mut plan = TrainingPlan::new("Test");
        plan.modules.push(Module::new("M1", 15));
        plan.cohorts.push(cohortplan_core::Cohort::new("A", date(2026, 8, 24)));
        let schedule = Schedule::default();

        assert_eq!(
            drill_down(&plan, &schedule, "A", "C9"),
            Err(AllocationError::ModuleNotFound("C9".into()))
        );
        assert_eq!(
            drill_down(&plan, &schedule, "Z", "M1"),
            Err(AllocationError::CohortNotFound("Z".into()))
        );
    }
}
