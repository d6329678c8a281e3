//! # cohortplan-core
//!
//! Core domain model and traits for the cohortplan training schedule generator.
//!
//! This crate provides:
//! - Domain types: `Module`, `Cohort`, `OffDaysCalendar`, `ScheduledSegment`, `Schedule`
//! - The curriculum sequence builder (fixed prefix + module table rows)
//! - Core traits: `Scheduler`, `Renderer`, `TabularSource`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cohortplan_core::{Cohort, Module, TrainingPlan};
//!
//! let mut plan = TrainingPlan::new("DEP 5388");
//! plan.modules.push(Module::new("M1", 15).name("Métier et formation"));
//! plan.modules.push(Module::new("M2", 30).name("Santé et Sécurité"));
//! plan.cohorts.push(Cohort::new(
//!     "ELEM261 (Day)",
//!     NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
//! ));
//! assert_eq!(plan.daily_capacity_hours, 6);
//! ```

pub mod calendar;
pub mod curriculum;

pub use calendar::{OffDayKind, OffDaysCalendar};
pub use curriculum::{
    build_sequence, build_sequence_with_prefix, category_color, standard_prefix, ModuleRow,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Type Aliases & Constants
// ============================================================================

/// Unique identifier for a module (course code)
pub type ModuleId = String;

/// Unique identifier for a cohort
pub type CohortId = String;

/// Unique identifier for a room
pub type RoomId = String;

/// Instructional hours available on one business day
pub const DEFAULT_DAILY_CAPACITY_HOURS: u32 = 6;

/// Upper bound accepted for the designated-module delay
pub const MAX_DELAY_WEEKS: u32 = 3;

/// Module postponed by the delay setting
pub const DEFAULT_DELAYED_MODULE: &str = "C2";

/// Fallback display color for modules built without one
pub const DEFAULT_MODULE_COLOR: &str = "#1f77b4";

// ============================================================================
// Module
// ============================================================================

/// One unit of instruction to schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Short code, unique within a sequence
    pub id: ModuleId,
    /// Display label
    pub name: String,
    /// Total instructional hours (must be positive)
    pub hours_required: i64,
    /// Classification tag, used for coloring only
    pub category: String,
    /// Display color (hex)
    pub color: String,
    /// Optional split of the required hours into phases
    pub phases: Option<PhaseHours>,
}

impl Module {
    /// Create a module with the given code and required hours
    pub fn new(id: impl Into<String>, hours_required: i64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            hours_required,
            category: String::new(),
            color: DEFAULT_MODULE_COLOR.into(),
            phases: None,
        }
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the category tag
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the display color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the phase breakdown
    pub fn phases(mut self, phases: PhaseHours) -> Self {
        self.phases = Some(phases);
        self
    }

    /// Label shown on timelines and detail tables: `"{id}: {name}"`
    pub fn task_label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }

    /// Phase breakdown, falling back to all-instruction when none was given
    pub fn phase_hours(&self) -> PhaseHours {
        self.phases.unwrap_or(PhaseHours {
            instruction: self.hours_required.max(0) as u32,
            exam: 0,
            recovery: 0,
            reprise: 0,
        })
    }

    /// Number of business days this module occupies at the given daily capacity.
    ///
    /// Returns 0 for non-positive durations or capacity.
    pub fn days_required(&self, daily_capacity_hours: u32) -> i64 {
        if self.hours_required <= 0 || daily_capacity_hours == 0 {
            return 0;
        }
        let capacity = daily_capacity_hours as i64;
        (self.hours_required + capacity - 1) / capacity
    }

    /// Validate the module as a member of a curriculum sequence
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.id.trim().is_empty() {
            return Err(ModuleError::MissingField {
                module: self.name.clone(),
                field: "id",
            });
        }
        if self.name.trim().is_empty() {
            return Err(ModuleError::MissingField {
                module: self.id.clone(),
                field: "name",
            });
        }
        if self.hours_required <= 0 {
            return Err(ModuleError::NonPositiveDuration {
                module_id: self.id.clone(),
                hours: self.hours_required,
            });
        }
        if let Some(phases) = self.phases {
            if phases.total() != self.hours_required {
                return Err(ModuleError::PhaseMismatch {
                    module_id: self.id.clone(),
                    phases: phases.total(),
                    hours: self.hours_required,
                });
            }
        }
        Ok(())
    }
}

/// Split of a module's hours into instruction, exam, recovery and reprise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseHours {
    pub instruction: u32,
    pub exam: u32,
    pub recovery: u32,
    pub reprise: u32,
}

impl PhaseHours {
    pub fn total(&self) -> i64 {
        self.instruction as i64 + self.exam as i64 + self.recovery as i64 + self.reprise as i64
    }

    /// Hours of each phase, in teaching order
    pub fn in_order(&self) -> [(PhaseKind, u32); 4] {
        [
            (PhaseKind::Instruction, self.instruction),
            (PhaseKind::Exam, self.exam),
            (PhaseKind::Recovery, self.recovery),
            (PhaseKind::Reprise, self.reprise),
        ]
    }
}

/// Kind of hours within a module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Instruction,
    Exam,
    Recovery,
    Reprise,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseKind::Instruction => write!(f, "Instruction"),
            PhaseKind::Exam => write!(f, "Examen"),
            PhaseKind::Recovery => write!(f, "Récupération"),
            PhaseKind::Reprise => write!(f, "Reprise"),
        }
    }
}

/// Layout of the periods that make up one business day (P1, P2, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLayout {
    /// Hours of each period, in order
    pub periods: Vec<u32>,
}

impl Default for PeriodLayout {
    fn default() -> Self {
        Self { periods: vec![3, 3] }
    }
}

impl PeriodLayout {
    pub fn new(periods: Vec<u32>) -> Self {
        Self { periods }
    }

    /// Total hours of one day
    pub fn total(&self) -> u32 {
        self.periods.iter().sum()
    }

    /// Label of the period at `index` ("P1", "P2", ...)
    pub fn label(index: usize) -> String {
        format!("P{}", index + 1)
    }
}

// ============================================================================
// Room
// ============================================================================

/// A physical room available to the program
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "Room_Code")]
    pub code: RoomId,
    #[serde(rename = "Room_Name")]
    pub name: String,
    #[serde(rename = "Capacity", default)]
    pub capacity: Option<u32>,
    #[serde(rename = "Room_Type", default)]
    pub kind: Option<String>,
}

impl Room {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            capacity: None,
            kind: None,
        }
    }

    /// Set the seating capacity
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

// ============================================================================
// Cohort
// ============================================================================

/// A class group following a shared schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    /// Unique label, may encode the shift (e.g. `ELEM262 (Night)`)
    pub id: CohortId,
    /// First date eligible for scheduling (may be a non-business day)
    #[serde(rename = "start")]
    pub start_date: NaiveDate,
}

impl Cohort {
    pub fn new(id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
        }
    }

    /// Shift encoded in the cohort label
    pub fn shift(&self) -> Shift {
        let id = self.id.to_lowercase();
        if id.contains("night") || id.contains("soir") {
            Shift::Night
        } else if id.contains("day") || id.contains("jour") {
            Shift::Day
        } else {
            Shift::Unspecified
        }
    }
}

/// Teaching shift of a cohort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
    Unspecified,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Day => write!(f, "Day"),
            Shift::Night => write!(f, "Night"),
            Shift::Unspecified => write!(f, "-"),
        }
    }
}

// ============================================================================
// Delay
// ============================================================================

/// Whether the designated-module delay moves the cursor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayMode {
    /// Accept the setting but leave the schedule untouched
    #[default]
    Ignore,
    /// Insert `weeks * 7` calendar days before the designated module
    Apply,
}

/// Postponement of one designated module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Delay in whole weeks (0..=MAX_DELAY_WEEKS)
    pub weeks: u32,
    /// Module the delay applies to
    pub module: ModuleId,
    pub mode: DelayMode,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            weeks: 1,
            module: DEFAULT_DELAYED_MODULE.into(),
            mode: DelayMode::Ignore,
        }
    }
}

impl DelayConfig {
    /// Delay in calendar days
    pub fn gap_days(&self) -> i64 {
        self.weeks as i64 * 7
    }

    /// True when the delay actually moves the schedule
    pub fn is_applied(&self) -> bool {
        self.mode == DelayMode::Apply && self.weeks > 0
    }
}

// ============================================================================
// Training Plan
// ============================================================================

/// Everything one allocation pass needs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Title shown on rendered outputs
    pub title: String,
    /// School year label (e.g. "2026-2027")
    pub school_year: String,
    /// Cohorts, in display order
    pub cohorts: Vec<Cohort>,
    /// Ordered module sequence shared by every cohort
    pub modules: Vec<Module>,
    /// Holidays and pedagogical days
    pub off_days: OffDaysCalendar,
    /// Instructional hours per business day
    pub daily_capacity_hours: u32,
    /// Split of a business day into periods
    pub periods: PeriodLayout,
    /// Designated-module delay
    pub delay: DelayConfig,
    /// Rooms of the program (display only)
    pub rooms: Vec<Room>,
}

impl TrainingPlan {
    /// Create an empty plan with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            school_year: String::new(),
            cohorts: Vec::new(),
            modules: Vec::new(),
            off_days: OffDaysCalendar::default(),
            daily_capacity_hours: DEFAULT_DAILY_CAPACITY_HOURS,
            periods: PeriodLayout::default(),
            delay: DelayConfig::default(),
            rooms: Vec::new(),
        }
    }

    /// Get a module by ID
    pub fn get_module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Get a cohort by ID
    pub fn get_cohort(&self, id: &str) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.id == id)
    }

    /// Total hours of the module sequence
    pub fn total_hours(&self) -> i64 {
        self.modules.iter().map(|m| m.hours_required).sum()
    }
}

// ============================================================================
// Schedule (Result)
// ============================================================================

/// One module taught to one cohort
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledSegment {
    pub cohort_id: CohortId,
    /// `"{module id}: {module name}"`
    pub task_label: String,
    /// First instructional day
    pub start_date: NaiveDate,
    /// Exclusive end, one day past the last instructional day
    pub finish_date: NaiveDate,
    /// Module ID
    pub resource_tag: ModuleId,
    pub display_color: String,
}

impl ScheduledSegment {
    /// Last instructional day of the segment
    pub fn last_day(&self) -> NaiveDate {
        self.finish_date - chrono::Duration::days(1)
    }

    /// Calendar span in days, including skipped days
    pub fn span_days(&self) -> i64 {
        (self.finish_date - self.start_date).num_days()
    }
}

/// The result of scheduling every cohort of a plan
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub title: String,
    /// Segments grouped by cohort (plan order), modules in sequence order
    pub segments: Vec<ScheduledSegment>,
}

impl Schedule {
    pub fn new(title: impl Into<String>, segments: Vec<ScheduledSegment>) -> Self {
        Self {
            title: title.into(),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Distinct cohort IDs in order of first appearance
    pub fn cohort_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if !ids.contains(&segment.cohort_id.as_str()) {
                ids.push(&segment.cohort_id);
            }
        }
        ids
    }

    /// Segments of one cohort, in sequence order
    pub fn segments_for<'a>(
        &'a self,
        cohort_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledSegment> + 'a {
        self.segments.iter().filter(move |s| s.cohort_id == cohort_id)
    }

    /// Segment of one module for one cohort
    pub fn find(&self, cohort_id: &str, module_id: &str) -> Option<&ScheduledSegment> {
        self.segments
            .iter()
            .find(|s| s.cohort_id == cohort_id && s.resource_tag == module_id)
    }

    /// Restrict the schedule to a single cohort
    pub fn only_cohort(&self, cohort_id: &str) -> Schedule {
        Schedule {
            title: self.title.clone(),
            segments: self.segments_for(cohort_id).cloned().collect(),
        }
    }

    /// Earliest segment start
    pub fn start(&self) -> Option<NaiveDate> {
        self.segments.iter().map(|s| s.start_date).min()
    }

    /// Latest (exclusive) segment finish
    pub fn end(&self) -> Option<NaiveDate> {
        self.segments.iter().map(|s| s.finish_date).max()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Core scheduling abstraction
pub trait Scheduler: Send + Sync {
    /// Compute the schedule of every cohort in the plan
    fn schedule(&self, plan: &TrainingPlan) -> Result<Schedule, ScheduleError>;
}

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a schedule to the output format
    fn render(&self, plan: &TrainingPlan, schedule: &Schedule) -> Result<Self::Output, RenderError>;
}

/// Provider of the module and room tables
pub trait TabularSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Rows of the module table, in table order
    fn module_rows(&self) -> Result<Vec<ModuleRow>, Self::Error>;

    /// Rows of the room table
    fn rooms(&self) -> Result<Vec<Room>, Self::Error>;
}

// ============================================================================
// Errors
// ============================================================================

/// Invalid module data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    #[error("Non-positive module duration: module '{module_id}' requires {hours}h")]
    NonPositiveDuration { module_id: ModuleId, hours: i64 },

    #[error("Missing required field '{field}' for module '{module}'")]
    MissingField { module: String, field: &'static str },

    #[error("Phase hours of module '{module_id}' sum to {phases}h but {hours}h are required")]
    PhaseMismatch {
        module_id: ModuleId,
        phases: i64,
        hours: i64,
    },

    #[error("Duplicate module id: {0}")]
    DuplicateId(ModuleId),
}

/// Allocation error for a single cohort
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Non-positive module duration: module '{module_id}' requires {hours}h")]
    NonPositiveDuration { module_id: ModuleId, hours: i64 },

    #[error("Daily capacity must be positive, got {0}h")]
    InvalidCapacity(u32),

    #[error("Period layout {periods:?} sums to {total}h but daily capacity is {capacity}h")]
    PeriodLayout {
        periods: Vec<u32>,
        total: u32,
        capacity: u32,
    },

    #[error("Module not found: {0}")]
    ModuleNotFound(ModuleId),

    #[error("Cohort not found: {0}")]
    CohortNotFound(CohortId),
}

/// Scheduling error for a whole plan
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Cohort '{cohort}': {source}")]
    Cohort {
        cohort: CohortId,
        #[source]
        source: AllocationError,
    },

    #[error("Invalid plan: {0}")]
    InvalidPlan(String),
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn segment(cohort: &str, module: &str, start: NaiveDate, finish: NaiveDate) -> ScheduledSegment {
        ScheduledSegment {
            cohort_id: cohort.into(),
            task_label: format!("{module}: {module}"),
            start_date: start,
            finish_date: finish,
            resource_tag: module.into(),
            display_color: DEFAULT_MODULE_COLOR.into(),
        }
    }

    #[test]
    fn module_builder() {
        let module = Module::new("M1", 15)
            .name("Métier et formation")
            .category("M")
            .color("#1f77b4");

        assert_eq!(module.id, "M1");
        assert_eq!(module.name, "Métier et formation");
        assert_eq!(module.hours_required, 15);
        assert_eq!(module.task_label(), "M1: Métier et formation");
    }

    #[test]
    fn days_required_rounds_up() {
        assert_eq!(Module::new("M1", 15).days_required(6), 3);
        assert_eq!(Module::new("M1", 6).days_required(6), 1);
        assert_eq!(Module::new("M1", 7).days_required(6), 2);
        assert_eq!(Module::new("M1", 0).days_required(6), 0);
        assert_eq!(Module::new("M1", 15).days_required(0), 0);
    }

    #[test]
    fn validate_rejects_non_positive_duration() {
        let err = Module::new("C2", 0).validate().unwrap_err();
        assert_eq!(
            err,
            ModuleError::NonPositiveDuration {
                module_id: "C2".into(),
                hours: 0
            }
        );
        assert!(Module::new("C2", -5).validate().is_err());
    }

    #[test]
    fn validate_rejects_phase_mismatch() {
        let module = Module::new("C3", 60).phases(PhaseHours {
            instruction: 45,
            exam: 6,
            recovery: 3,
            reprise: 3,
        });
        assert!(matches!(
            module.validate(),
            Err(ModuleError::PhaseMismatch { phases: 57, hours: 60, .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let module = Module::new("C3", 60).name("  ");
        assert!(matches!(
            module.validate(),
            Err(ModuleError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn phase_hours_default_to_instruction() {
        let phases = Module::new("M1", 15).phase_hours();
        assert_eq!(phases.instruction, 15);
        assert_eq!(phases.total(), 15);
    }

    #[test]
    fn phase_kind_display() {
        assert_eq!(PhaseKind::Instruction.to_string(), "Instruction");
        assert_eq!(PhaseKind::Exam.to_string(), "Examen");
        assert_eq!(PhaseKind::Recovery.to_string(), "Récupération");
        assert_eq!(PhaseKind::Reprise.to_string(), "Reprise");
    }

    #[test]
    fn period_layout_defaults_to_two_three_hour_periods() {
        let layout = PeriodLayout::default();
        assert_eq!(layout.periods, vec![3, 3]);
        assert_eq!(layout.total(), DEFAULT_DAILY_CAPACITY_HOURS);
        assert_eq!(PeriodLayout::label(1), "P2");
    }

    #[test]
    fn cohort_shift_from_label() {
        let start = date(2026, 8, 24);
        assert_eq!(Cohort::new("ELEM261 (Day)", start).shift(), Shift::Day);
        assert_eq!(Cohort::new("ELEM262 (Night)", start).shift(), Shift::Night);
        assert_eq!(Cohort::new("ELEM265 soir", start).shift(), Shift::Night);
        assert_eq!(Cohort::new("ELEM270", start).shift(), Shift::Unspecified);
    }

    #[test]
    fn delay_defaults_to_one_ignored_week() {
        let delay = DelayConfig::default();
        assert_eq!(delay.weeks, 1);
        assert_eq!(delay.module, "C2");
        assert_eq!(delay.gap_days(), 7);
        assert!(!delay.is_applied());

        let applied = DelayConfig {
            mode: DelayMode::Apply,
            ..DelayConfig::default()
        };
        assert!(applied.is_applied());
    }

    #[test]
    fn segment_last_day_and_span() {
        let seg = segment("A", "M1", date(2026, 8, 24), date(2026, 8, 27));
        assert_eq!(seg.last_day(), date(2026, 8, 26));
        assert_eq!(seg.span_days(), 3);
    }

    #[test]
    fn schedule_groups_by_cohort() {
        let schedule = Schedule::new(
            "Test",
            vec![
                segment("A", "M1", date(2026, 8, 24), date(2026, 8, 27)),
                segment("A", "M2", date(2026, 8, 27), date(2026, 9, 3)),
                segment("B", "M1", date(2026, 10, 5), date(2026, 10, 8)),
            ],
        );

        assert_eq!(schedule.cohort_ids(), vec!["A", "B"]);
        assert_eq!(schedule.segments_for("A").count(), 2);
        assert_eq!(schedule.start(), Some(date(2026, 8, 24)));
        assert_eq!(schedule.end(), Some(date(2026, 10, 8)));
        assert_eq!(
            schedule.find("B", "M1").map(|s| s.start_date),
            Some(date(2026, 10, 5))
        );
        assert_eq!(schedule.only_cohort("B").segments.len(), 1);
    }

    #[test]
    fn empty_schedule_has_no_bounds() {
        let schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.start(), None);
        assert_eq!(schedule.end(), None);
    }

    #[test]
    fn plan_lookup() {
        let mut plan = TrainingPlan::new("Test");
        plan.modules.push(Module::new("M1", 15));
        plan.modules.push(Module::new("M2", 30));
        plan.cohorts.push(Cohort::new("A", date(2026, 8, 24)));

        assert_eq!(plan.get_module("M2").map(|m| m.hours_required), Some(30));
        assert!(plan.get_module("C9").is_none());
        assert!(plan.get_cohort("A").is_some());
        assert_eq!(plan.total_hours(), 45);
    }

    #[test]
    fn schedule_error_names_cohort() {
        let err = ScheduleError::Cohort {
            cohort: "ELEM261 (Day)".into(),
            source: AllocationError::InvalidCapacity(0),
        };
        assert_eq!(
            err.to_string(),
            "Cohort 'ELEM261 (Day)': Daily capacity must be positive, got 0h"
        );
    }
}
