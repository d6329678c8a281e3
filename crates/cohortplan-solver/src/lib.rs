//! # cohortplan-solver
//!
//! Greedy business-day allocator for cohort training schedules.
//!
//! This crate provides:
//! - Sequential allocation of a module sequence to business days
//! - Optional postponement of one designated module
//! - Multi-cohort composition (cohorts are independent, computed in parallel)
//! - Period drill-down of one module (P1/P2 per day, phase by phase)
//! - Module and cohort summaries
//!
//! ## Example
//!
//! ```rust,ignore
//! use cohortplan_core::Scheduler;
//! use cohortplan_solver::CohortAllocator;
//!
//! let plan = cohortplan_data::load_plan(path)?;
//! let schedule = CohortAllocator::new().schedule(&plan)?;
//! ```

pub mod allocate;
pub mod periods;
pub mod summary;

pub use allocate::{allocate, allocate_with_delay};
pub use periods::{drill_down, expand_periods, ModuleDrillDown, PeriodSlot};
pub use summary::{summarize_cohorts, CohortSummary, ModuleSummary};

use rayon::prelude::*;
use tracing::{info, warn};

use cohortplan_core::{
    Cohort, DelayConfig, Schedule, ScheduleError, ScheduledSegment, Scheduler, TrainingPlan,
};

/// Allocator for every cohort of a plan
pub struct CohortAllocator {
    /// Allocate cohorts on the rayon pool
    pub parallel: bool,
}

impl CohortAllocator {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Allocate cohorts one after the other on the calling thread
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    fn effective_delay<'a>(&self, plan: &'a TrainingPlan) -> Option<&'a DelayConfig> {
        let delay = &plan.delay;
        if !delay.is_applied() {
            if delay.weeks > 0 {
                warn!(
                    weeks = delay.weeks,
                    module = %delay.module,
                    "delay configured but not applied (mode = ignore)"
                );
            }
            return None;
        }
        if plan.get_module(&delay.module).is_none() {
            warn!(module = %delay.module, "delayed module is not in the sequence; delay has no effect");
        }
        Some(delay)
    }
}

impl Default for CohortAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for CohortAllocator {
    fn schedule(&self, plan: &TrainingPlan) -> Result<Schedule, ScheduleError> {
        let delay = self.effective_delay(plan);

        let allocate_cohort = |cohort: &Cohort| -> Result<Vec<ScheduledSegment>, ScheduleError> {
            allocate_with_delay(
                &cohort.id,
                &plan.modules,
                cohort.start_date,
                plan.daily_capacity_hours,
                &plan.off_days,
                delay,
            )
            .map_err(|source| ScheduleError::Cohort {
                cohort: cohort.id.clone(),
                source,
            })
        };

        // Both paths keep plan order
        let per_cohort: Vec<Vec<ScheduledSegment>> = if self.parallel {
            plan.cohorts.par_iter().map(allocate_cohort).collect::<Result<_, _>>()?
        } else {
            plan.cohorts.iter().map(allocate_cohort).collect::<Result<_, _>>()?
        };

        let segments: Vec<ScheduledSegment> = per_cohort.into_iter().flatten().collect();
        info!(
            cohorts = plan.cohorts.len(),
            segments = segments.len(),
            "schedule computed"
        );
        Ok(Schedule::new(plan.title.clone(), segments))
    }
}
