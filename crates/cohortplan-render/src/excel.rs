//! Excel workbook renderer
//!
//! Generates an XLSX file with one sheet per view of the plan:
//! - Schedule: the detail table, one row per (cohort, module)
//! - Cohorts: one summary row per cohort
//! - Off Days: holidays and pedagogical days in date order
//! - Rooms: the room table
//!
//! ```text
//! Sheet: Schedule
//! | Cohort        | Module | Task                     | Start      | Finish     | Days | Hours |
//! |---------------|--------|--------------------------|------------|------------|------|-------|
//! | ELEM261 (Day) | M1     | M1: Métier et formation  | 2026-08-24 | 2026-08-27 | 3    | 15    |
//! ```
//!
//! `Finish` is exclusive, matching the timeline.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use cohortplan_core::{RenderError, Renderer, Schedule, TrainingPlan};
use cohortplan_solver::summarize_cohorts;

/// Excel workbook renderer
#[derive(Clone, Debug)]
pub struct ExcelRenderer {
    /// Include the Off Days sheet
    pub include_off_days: bool,
    /// Include the Rooms sheet
    pub include_rooms: bool,
    /// Fill the Module column with the module's display color
    pub color_modules: bool,
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self {
            include_off_days: true,
            include_rooms: true,
            color_modules: true,
        }
    }
}

/// Reusable cell formats
struct ExcelFormats {
    header: Format,
    text: Format,
    date: Format,
    integer: Format,
    total_row: Format,
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the Off Days sheet
    pub fn no_off_days(mut self) -> Self {
        self.include_off_days = false;
        self
    }

    /// Skip the Rooms sheet
    pub fn no_rooms(mut self) -> Self {
        self.include_rooms = false;
        self
    }

    /// Generate Excel workbook bytes
    pub fn render_to_bytes(
        &self,
        plan: &TrainingPlan,
        schedule: &Schedule,
    ) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let formats = Self::create_formats();

        self.add_schedule_sheet(&mut workbook, plan, schedule, &formats)?;
        Self::add_cohorts_sheet(&mut workbook, plan, schedule, &formats)?;
        if self.include_off_days {
            Self::add_off_days_sheet(&mut workbook, plan, &formats)?;
        }
        if self.include_rooms {
            Self::add_rooms_sheet(&mut workbook, plan, &formats)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))
    }

    fn create_formats() -> ExcelFormats {
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(0x4472C4)
            .set_font_color(0xFFFFFF)
            .set_border(FormatBorder::Thin);

        let text = Format::new().set_border(FormatBorder::Thin);

        let date = Format::new()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        let integer = Format::new()
            .set_num_format("#,##0")
            .set_border(FormatBorder::Thin);

        let total_row = Format::new()
            .set_bold()
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        ExcelFormats {
            header,
            text,
            date,
            integer,
            total_row,
        }
    }

    fn add_schedule_sheet(
        &self,
        workbook: &mut Workbook,
        plan: &TrainingPlan,
        schedule: &Schedule,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Schedule").map_err(xlsx_error)?;
        write_headers(
            sheet,
            &["Cohort", "Module", "Task", "Start", "Finish", "Days", "Hours"],
            &[18, 10, 40, 12, 12, 8, 8],
            formats,
        )?;

        let mut row = 1u32;
        for segment in &schedule.segments {
            let days = plan
                .off_days
                .business_days_in(segment.start_date, segment.finish_date);
            let hours = plan
                .get_module(&segment.resource_tag)
                .map_or(0, |m| m.hours_required);

            let module_format = match parse_hex_color(&segment.display_color) {
                Some(color) if self.color_modules => formats
                    .text
                    .clone()
                    .set_background_color(color)
                    .set_font_color(0xFFFFFF)
                    .set_bold(),
                _ => formats.text.clone(),
            };

            sheet
                .write_with_format(row, 0, &segment.cohort_id, &formats.text)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 1, &segment.resource_tag, &module_format)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 2, &segment.task_label, &formats.text)
                .map_err(xlsx_error)?;
            write_date(sheet, row, 3, segment.start_date, formats)?;
            write_date(sheet, row, 4, segment.finish_date, formats)?;
            sheet
                .write_with_format(row, 5, days as f64, &formats.integer)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 6, hours as f64, &formats.integer)
                .map_err(xlsx_error)?;
            row += 1;
        }

        sheet.set_freeze_panes(1, 0).ok();
        Ok(())
    }

    fn add_cohorts_sheet(
        workbook: &mut Workbook,
        plan: &TrainingPlan,
        schedule: &Schedule,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Cohorts").map_err(xlsx_error)?;
        write_headers(
            sheet,
            &["Cohort", "Shift", "Start", "Finish", "Days", "Hours", "Modules"],
            &[18, 8, 12, 12, 8, 8, 9],
            formats,
        )?;

        let summaries = summarize_cohorts(plan, schedule);
        let mut row = 1u32;
        for summary in &summaries {
            sheet
                .write_with_format(row, 0, &summary.cohort_id, &formats.text)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 1, summary.shift.to_string(), &formats.text)
                .map_err(xlsx_error)?;
            write_date(sheet, row, 2, summary.start, formats)?;
            write_date(sheet, row, 3, summary.finish, formats)?;
            sheet
                .write_with_format(row, 4, summary.instructional_days as f64, &formats.integer)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 5, summary.total_hours as f64, &formats.integer)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 6, summary.modules as f64, &formats.integer)
                .map_err(xlsx_error)?;
            row += 1;
        }

        // Total row
        sheet
            .write_with_format(row, 0, "TOTAL", &formats.total_row)
            .map_err(xlsx_error)?;
        for col in 1..=4 {
            sheet
                .write_with_format(row, col, "", &formats.total_row)
                .map_err(xlsx_error)?;
        }
        let total_hours: i64 = summaries.iter().map(|s| s.total_hours).sum();
        sheet
            .write_with_format(row, 5, total_hours as f64, &formats.total_row)
            .map_err(xlsx_error)?;
        sheet
            .write_with_format(row, 6, "", &formats.total_row)
            .map_err(xlsx_error)?;

        Ok(())
    }

    fn add_off_days_sheet(
        workbook: &mut Workbook,
        plan: &TrainingPlan,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Off Days").map_err(xlsx_error)?;
        write_headers(sheet, &["Date", "Weekday", "Kind"], &[12, 10, 20], formats)?;

        for (row, (date, kind)) in (1u32..).zip(plan.off_days.iter()) {
            write_date(sheet, row, 0, date, formats)?;
            sheet
                .write_with_format(row, 1, date.format("%A").to_string(), &formats.text)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 2, kind.to_string(), &formats.text)
                .map_err(xlsx_error)?;
        }

        Ok(())
    }

    fn add_rooms_sheet(
        workbook: &mut Workbook,
        plan: &TrainingPlan,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Rooms").map_err(xlsx_error)?;
        write_headers(
            sheet,
            &["Room Code", "Room Name", "Capacity", "Type"],
            &[12, 30, 10, 16],
            formats,
        )?;

        for (row, room) in (1u32..).zip(&plan.rooms) {
            sheet
                .write_with_format(row, 0, &room.code, &formats.text)
                .map_err(xlsx_error)?;
            sheet
                .write_with_format(row, 1, &room.name, &formats.text)
                .map_err(xlsx_error)?;
            if let Some(capacity) = room.capacity {
                sheet
                    .write_with_format(row, 2, capacity as f64, &formats.integer)
                    .map_err(xlsx_error)?;
            } else {
                sheet
                    .write_with_format(row, 2, "", &formats.text)
                    .map_err(xlsx_error)?;
            }
            sheet
                .write_with_format(row, 3, room.kind.as_deref().unwrap_or(""), &formats.text)
                .map_err(xlsx_error)?;
        }

        Ok(())
    }
}

fn write_headers(
    sheet: &mut Worksheet,
    headers: &[&str],
    widths: &[u16],
    formats: &ExcelFormats,
) -> Result<(), RenderError> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &formats.header)
            .map_err(xlsx_error)?;
    }
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).ok();
    }
    Ok(())
}

fn write_date(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    date: NaiveDate,
    formats: &ExcelFormats,
) -> Result<(), RenderError> {
    sheet
        .write_with_format(row, col, date.format("%Y-%m-%d").to_string(), &formats.date)
        .map_err(xlsx_error)?;
    Ok(())
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> RenderError {
    RenderError::Format(e.to_string())
}

/// `"#1f77b4"` → `0x1F77B4`
fn parse_hex_color(color: &str) -> Option<u32> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, plan: &TrainingPlan, schedule: &Schedule) -> Result<Vec<u8>, RenderError> {
        if schedule.is_empty() {
            return Err(RenderError::InvalidData("No segments to render".into()));
        }
        self.render_to_bytes(plan, schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortplan_core::{Module, Room, ScheduledSegment};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_plan() -> TrainingPlan {
        let mut plan = TrainingPlan::new("Test");
        plan.modules.push(Module::new("M1", 15).color("#1f77b4"));
        plan.rooms.push(Room::new("A-101", "Atelier").capacity(20));
        plan.rooms.push(Room::new("B-204", "Classe"));
        plan
    }

    fn create_test_schedule() -> Schedule {
        Schedule::new(
            "Test",
            vec![ScheduledSegment {
                cohort_id: "A".into(),
                task_label: "M1: M1".into(),
                start_date: date(2026, 8, 24),
                finish_date: date(2026, 8, 27),
                resource_tag: "M1".into(),
                display_color: "#1f77b4".into(),
            }],
        )
    }

    #[test]
    fn excel_renderer_creation() {
        let renderer = ExcelRenderer::new();
        assert!(renderer.include_off_days);
        assert!(renderer.include_rooms);

        let renderer = ExcelRenderer::new().no_off_days().no_rooms();
        assert!(!renderer.include_off_days);
        assert!(!renderer.include_rooms);
    }

    #[test]
    fn excel_produces_valid_output() {
        let bytes = ExcelRenderer::new()
            .render(&create_test_plan(), &create_test_schedule())
            .unwrap();
        // XLSX files start with PK (ZIP header)
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn excel_empty_schedule_fails() {
        let result = ExcelRenderer::new().render(&create_test_plan(), &Schedule::default());
        assert!(matches!(result, Err(RenderError::InvalidData(_))));
    }

    #[test]
    fn parse_hex_color_works() {
        assert_eq!(parse_hex_color("#1f77b4"), Some(0x1F77B4));
        assert_eq!(parse_hex_color("1f77b4"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
