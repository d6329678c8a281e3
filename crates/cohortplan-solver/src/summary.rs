//! Module and cohort summaries.

use chrono::NaiveDate;
use serde::Serialize;

use cohortplan_core::{Module, ModuleId, Schedule, Shift, TrainingPlan};

/// Hour breakdown of one module
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub module_id: ModuleId,
    pub name: String,
    pub hours_required: i64,
    pub instruction: u32,
    pub exam: u32,
    pub recovery: u32,
    pub reprise: u32,
    /// Business days at the plan's daily capacity
    pub days_required: i64,
}

impl ModuleSummary {
    pub fn of(module: &Module, daily_capacity_hours: u32) -> Self {
        let phases = module.phase_hours();
        Self {
            module_id: module.id.clone(),
            name: module.name.clone(),
            hours_required: module.hours_required,
            instruction: phases.instruction,
            exam: phases.exam,
            recovery: phases.recovery,
            reprise: phases.reprise,
            days_required: module.days_required(daily_capacity_hours),
        }
    }
}

/// Overview of one cohort's schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CohortSummary {
    pub cohort_id: String,
    pub shift: Shift,
    /// First instructional day
    pub start: NaiveDate,
    /// Exclusive end of the last module
    pub finish: NaiveDate,
    /// Business days consumed by all modules
    pub instructional_days: usize,
    pub total_hours: i64,
    pub modules: usize,
}

/// One summary per cohort that has at least one segment, in schedule order
pub fn summarize_cohorts(plan: &TrainingPlan, schedule: &Schedule) -> Vec<CohortSummary> {
    schedule
        .cohort_ids()
        .into_iter()
        .filter_map(|cohort_id| {
            let segments: Vec<_> = schedule.segments_for(cohort_id).collect();
            let start = segments.iter().map(|s| s.start_date).min()?;
            let finish = segments.iter().map(|s| s.finish_date).max()?;

            let instructional_days = segments
                .iter()
                .map(|s| plan.off_days.business_days_in(s.start_date, s.finish_date))
                .sum();
            let total_hours = segments
                .iter()
                .filter_map(|s| plan.get_module(&s.resource_tag))
                .map(|m| m.hours_required)
                .sum();
            let shift = plan
                .get_cohort(cohort_id)
                .map_or(Shift::Unspecified, |c| c.shift());

            Some(CohortSummary {
                cohort_id: cohort_id.to_string(),
                shift,
                start,
                finish,
                instructional_days,
                total_hours,
                modules: segments.len(),
            })
        })
        .collect()
}
