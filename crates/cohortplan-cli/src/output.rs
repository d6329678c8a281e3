//! Console and file formats of the `schedule` and `details` commands

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use cohortplan_core::{Renderer, Schedule, TrainingPlan};
use cohortplan_render::TextRenderer;
use cohortplan_solver::ModuleDrillDown;

/// Output format of the detail table
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScheduleFormat {
    /// Aligned table
    Text,
    /// Full schedule as JSON
    Json,
    /// Cohort, Task, Start, Finish
    Csv,
}

/// Output format of the `details` command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DetailsFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct DetailRow<'a> {
    #[serde(rename = "Cohort")]
    cohort: &'a str,
    #[serde(rename = "Task")]
    task: &'a str,
    #[serde(rename = "Start")]
    start: NaiveDate,
    #[serde(rename = "Finish")]
    finish: NaiveDate,
}

pub fn format_schedule(
    plan: &TrainingPlan,
    schedule: &Schedule,
    format: ScheduleFormat,
) -> Result<String> {
    match format {
        ScheduleFormat::Text => Ok(TextRenderer.render(plan, schedule)?),
        ScheduleFormat::Json => Ok(serde_json::to_string_pretty(schedule)? + "\n"),
        ScheduleFormat::Csv => {
            // Header written by hand so an empty schedule still gets one
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            writer.write_record(["Cohort", "Task", "Start", "Finish"])?;
            for segment in &schedule.segments {
                writer.serialize(DetailRow {
                    cohort: &segment.cohort_id,
                    task: &segment.task_label,
                    start: segment.start_date,
                    finish: segment.finish_date,
                })?;
            }
            let bytes = writer.into_inner().map_err(|e| anyhow!("{}", e.error()))?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

pub fn format_details(details: &ModuleDrillDown, format: DetailsFormat) -> Result<String> {
    match format {
        DetailsFormat::Json => Ok(serde_json::to_string_pretty(details)? + "\n"),
        DetailsFormat::Text => Ok(details_text(details)),
    }
}

fn details_text(details: &ModuleDrillDown) -> String {
    let segment = &details.segment;
    let summary = &details.summary;

    let mut out = format!("{}\n", segment.task_label);
    out.push_str(&format!("Cohort:   {}\n", segment.cohort_id));
    out.push_str(&format!(
        "Dates:    {} to {} (finish {})\n",
        segment.start_date,
        segment.last_day(),
        segment.finish_date
    ));
    out.push_str(&format!(
        "Hours:    {} (instruction {}, exam {}, recovery {}, reprise {})\n",
        summary.hours_required,
        summary.instruction,
        summary.exam,
        summary.recovery,
        summary.reprise
    ));
    out.push_str(&format!("Days:     {}\n\n", summary.days_required));

    out.push_str(&format!("{:<10}  {:<6}  {:>5}  {}\n", "Date", "Period", "Hours", "Phase"));
    out.push_str(&format!("{}  {}  {}  {}\n", "-".repeat(10), "-".repeat(6), "-".repeat(5), "-".repeat(12)));
    for slot in &details.slots {
        out.push_str(&format!(
            "{:<10}  {:<6}  {:>5}  {}\n",
            slot.date.to_string(),
            slot.period,
            slot.hours,
            slot.phase
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortplan_core::Scheduler;
    use cohortplan_data::builtin::sample_plan;
    use cohortplan_solver::{drill_down, CohortAllocator};

    fn year() -> (TrainingPlan, Schedule) {
        let plan = sample_plan().unwrap();
        let schedule = CohortAllocator::new().schedule(&plan).unwrap();
        (plan, schedule)
    }

    #[test]
    fn csv_has_header_and_one_row_per_segment() {
        let (plan, schedule) = year();
        let csv = format_schedule(&plan, &schedule, ScheduleFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Cohort,Task,Start,Finish");
        assert_eq!(lines.len(), 1 + schedule.segments.len());
        assert_eq!(
            lines[1],
            "ELEM261 (Day),M1: Métier et formation,2026-08-24,2026-08-27"
        );
    }

    #[test]
    fn csv_of_empty_schedule_keeps_header() {
        let (plan, _) = year();
        let csv = format_schedule(&plan, &Schedule::default(), ScheduleFormat::Csv).unwrap();
        assert_eq!(csv, "Cohort,Task,Start,Finish\n");
    }

    #[test]
    fn json_round_trips() {
        let (plan, schedule) = year();
        let json = format_schedule(&plan, &schedule, ScheduleFormat::Json).unwrap();
        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[test]
    fn details_text_lists_every_slot() {
        let (plan, schedule) = year();
        let details = drill_down(&plan, &schedule, "ELEM261 (Day)", "C2").unwrap();
        let text = format_details(&details, DetailsFormat::Text).unwrap();

        assert!(text.starts_with("C2: Circuits à courant continu\n"));
        assert!(text.contains("Hours:    90 (instruction 78, exam 6, recovery 3, reprise 3)"));
        assert_eq!(text.lines().count(), 8 + details.slots.len());
        assert!(text.contains("Examen"));
    }
}
