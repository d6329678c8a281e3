//! # cohortplan-render
//!
//! Rendering backends for cohortplan schedules.
//!
//! This crate provides:
//! - SVG timeline (one row per cohort, bars coloured per module)
//! - Standalone HTML page with the timeline and a detail table
//! - Plain-text detail table for the console
//! - Excel workbook (schedule, cohorts, off-days, rooms)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cohortplan_core::Renderer;
//! use cohortplan_render::{ExcelRenderer, HtmlTimelineRenderer, SvgTimelineRenderer, TextRenderer};
//!
//! let svg = SvgTimelineRenderer::default().render(&plan, &schedule)?;
//! let html = HtmlTimelineRenderer::new().render(&plan, &schedule)?;
//! let table = TextRenderer.render(&plan, &schedule)?;
//!
//! let xlsx_bytes = ExcelRenderer::new().render(&plan, &schedule)?;
//! std::fs::write("cohortes.xlsx", xlsx_bytes)?;
//! ```

pub mod excel;
mod layout;
pub mod timeline;

pub use excel::ExcelRenderer;
pub use timeline::{HtmlTimelineRenderer, TimelineTheme};

use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

use cohortplan_core::{RenderError, Renderer, Schedule, ScheduledSegment, TrainingPlan};

use crate::layout::TimelineLayout;

/// SVG timeline renderer configuration
#[derive(Clone, Debug)]
pub struct SvgTimelineRenderer {
    /// Width of the chart area (excluding labels) in pixels
    pub chart_width: u32,
    /// Height per cohort row in pixels
    pub row_height: u32,
    /// Width of the cohort label column in pixels
    pub label_width: u32,
    /// Header height in pixels
    pub header_height: u32,
    /// Padding around the chart
    pub padding: u32,
    /// Shade holidays and pedagogical days
    pub show_off_days: bool,
    /// Draw one legend entry per module
    pub show_legend: bool,
    pub off_day_color: String,
    pub background_color: String,
    pub grid_color: String,
    pub text_color: String,
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
}

impl Default for SvgTimelineRenderer {
    fn default() -> Self {
        Self {
            chart_width: 1000,
            row_height: 36,
            label_width: 160,
            header_height: 50,
            padding: 20,
            show_off_days: true,
            show_legend: true,
            off_day_color: "#f1c40f".into(),
            background_color: "#ffffff".into(),
            grid_color: "#ecf0f1".into(),
            text_color: "#2c3e50".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_size: 12,
        }
    }
}

const LEGEND_ENTRY_WIDTH: u32 = 90;
const LEGEND_ROW_HEIGHT: u32 = 20;

impl SvgTimelineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure chart width
    pub fn chart_width(mut self, width: u32) -> Self {
        self.chart_width = width;
        self
    }

    /// Configure row height
    pub fn row_height(mut self, height: u32) -> Self {
        self.row_height = height;
        self
    }

    /// Leave holidays and pedagogical days unshaded
    pub fn hide_off_days(mut self) -> Self {
        self.show_off_days = false;
        self
    }

    fn total_width(&self) -> u32 {
        self.padding * 2 + self.label_width + self.chart_width
    }

    fn chart_top(&self) -> u32 {
        self.padding + self.header_height
    }

    fn legend_rows(&self, entries: usize) -> u32 {
        if !self.show_legend || entries == 0 {
            return 0;
        }
        let per_row = ((self.label_width + self.chart_width) / LEGEND_ENTRY_WIDTH).max(1) as usize;
        entries.div_ceil(per_row) as u32
    }

    /// Month ticks and labels
    fn render_header(&self, layout: &TimelineLayout) -> Group {
        let mut group = Group::new().set("class", "header");

        let header_bg = Rectangle::new()
            .set("x", self.padding)
            .set("y", self.padding)
            .set("width", self.label_width + self.chart_width)
            .set("height", self.header_height)
            .set("fill", "#f8f9fa");
        group = group.add(header_bg);

        for month in layout.month_starts() {
            let x = layout.x(month);
            let tick = Line::new()
                .set("x1", x)
                .set("y1", self.chart_top() - 10)
                .set("x2", x)
                .set("y2", self.chart_top())
                .set("stroke", self.text_color.as_str())
                .set("stroke-width", 1);
            group = group.add(tick);

            let label = Text::new(month.format("%b %Y").to_string())
                .set("x", x + 4.0)
                .set("y", self.chart_top() - 15)
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.font_size - 1)
                .set("fill", self.text_color.as_str());
            group = group.add(label);
        }

        group
    }

    /// Row separators, month lines and off-day shading
    fn render_grid(&self, plan: &TrainingPlan, rows: usize, layout: &TimelineLayout) -> Group {
        let mut group = Group::new().set("class", "grid");
        let top = self.chart_top();
        let bottom = top + rows as u32 * self.row_height;

        if self.show_off_days {
            for (date, kind) in plan.off_days.iter().filter(|(d, _)| layout.contains(*d)) {
                let shade = Rectangle::new()
                    .set("x", layout.x(date))
                    .set("y", top)
                    .set("width", layout.px_per_day.max(1.0))
                    .set("height", bottom - top)
                    .set("fill", self.off_day_color.as_str())
                    .set("opacity", 0.35)
                    .set("class", format!("off-day {}", kind_class(kind)));
                group = group.add(shade);
            }
        }

        for i in 0..=rows {
            let y = top + i as u32 * self.row_height;
            let line = Line::new()
                .set("x1", self.padding)
                .set("y1", y)
                .set("x2", self.padding + self.label_width + self.chart_width)
                .set("y2", y)
                .set("stroke", self.grid_color.as_str())
                .set("stroke-width", 1);
            group = group.add(line);
        }

        for month in layout.month_starts() {
            let x = layout.x(month);
            let line = Line::new()
                .set("x1", x)
                .set("y1", top)
                .set("x2", x)
                .set("y2", bottom)
                .set("stroke", self.grid_color.as_str())
                .set("stroke-width", 1);
            group = group.add(line);
        }

        group
    }

    /// Cohort label and one bar per segment
    fn render_cohort<'a>(
        &self,
        cohort_id: &str,
        segments: impl Iterator<Item = &'a ScheduledSegment>,
        row: usize,
        layout: &TimelineLayout,
    ) -> Group {
        let mut group = Group::new().set("class", "cohort");

        let y = self.chart_top() + row as u32 * self.row_height;
        let bar_height = (f64::from(self.row_height) * 0.6) as u32;
        let bar_y = y + (self.row_height - bar_height) / 2;

        let label = Text::new(truncate(cohort_id, 22))
            .set("x", self.padding + 8)
            .set("y", y + self.row_height / 2 + 4)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", self.text_color.as_str());
        group = group.add(label);

        for segment in segments {
            let x = layout.x(segment.start_date);
            let width = layout
                .width(segment.start_date, segment.finish_date)
                .max(2.0);

            let bar = Rectangle::new()
                .set("x", x)
                .set("y", bar_y)
                .set("width", width)
                .set("height", bar_height)
                .set("fill", segment.display_color.as_str())
                .set("stroke", self.background_color.as_str())
                .set("stroke-width", 1)
                .set("data-task", segment.task_label.as_str());
            group = group.add(bar);

            // Module code inside the bar when it fits
            let code = segment.resource_tag.as_str();
            let text_width = code.chars().count() as f64 * f64::from(self.font_size) * 0.6;
            if width > text_width + 4.0 {
                let text = Text::new(code)
                    .set("x", x + width / 2.0)
                    .set("y", bar_y + bar_height / 2 + 4)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size - 2)
                    .set("fill", "#ffffff")
                    .set("text-anchor", "middle");
                group = group.add(text);
            }
        }

        group
    }

    /// One colour box per module, wrapped over several rows
    fn render_legend(&self, plan: &TrainingPlan, y_offset: u32) -> Group {
        let mut group = Group::new().set("class", "legend");
        let per_row = ((self.label_width + self.chart_width) / LEGEND_ENTRY_WIDTH).max(1) as usize;
        let box_size = 12;

        for (i, module) in plan.modules.iter().enumerate() {
            let x = self.padding + (i % per_row) as u32 * LEGEND_ENTRY_WIDTH;
            let y = y_offset + (i / per_row) as u32 * LEGEND_ROW_HEIGHT;

            let swatch = Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", box_size)
                .set("height", box_size)
                .set("rx", 2)
                .set("fill", module.color.as_str());
            group = group.add(swatch);

            let label = Text::new(module.id.as_str())
                .set("x", x + box_size + 5)
                .set("y", y + box_size - 2)
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.font_size - 1)
                .set("fill", self.text_color.as_str());
            group = group.add(label);
        }

        group
    }
}

impl Renderer for SvgTimelineRenderer {
    type Output = String;

    fn render(&self, plan: &TrainingPlan, schedule: &Schedule) -> Result<String, RenderError> {
        let left = f64::from(self.padding + self.label_width);
        let layout = TimelineLayout::new(schedule, left, self.chart_width)
            .ok_or_else(|| RenderError::InvalidData("No segments to render".into()))?;

        let cohorts = schedule.cohort_ids();
        let rows_bottom = self.chart_top() + cohorts.len() as u32 * self.row_height;
        let legend_rows = self.legend_rows(plan.modules.len());

        let width = self.total_width();
        let height = rows_bottom + self.padding + legend_rows * LEGEND_ROW_HEIGHT + 10;

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.background_color.as_str());
        document = document.add(background);

        let title = Text::new(plan.title.as_str())
            .set("x", self.padding)
            .set("y", self.padding + 15)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size + 4)
            .set("font-weight", "bold")
            .set("fill", self.text_color.as_str());
        document = document.add(title);

        document = document.add(self.render_grid(plan, cohorts.len(), &layout));
        document = document.add(self.render_header(&layout));

        for (row, cohort_id) in cohorts.iter().enumerate() {
            document = document.add(self.render_cohort(
                cohort_id,
                schedule.segments_for(cohort_id),
                row,
                &layout,
            ));
        }

        if legend_rows > 0 {
            document = document.add(self.render_legend(plan, rows_bottom + 10));
        }

        let mut output = Vec::new();
        svg::write(&mut output, &document)
            .map_err(|e| RenderError::Format(format!("Failed to write SVG: {}", e)))?;

        String::from_utf8(output).map_err(|e| RenderError::Format(format!("Invalid UTF-8: {}", e)))
    }
}

fn kind_class(kind: cohortplan_core::OffDayKind) -> &'static str {
    match kind {
        cohortplan_core::OffDayKind::Holiday => "holiday",
        cohortplan_core::OffDayKind::PedagogicalDay => "pedagogical",
    }
}

/// Truncate a string to at most `max` characters, with ellipsis
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars().take(max.saturating_sub(1)).collect::<String>()
        )
    }
}

/// Aligned detail table for console output
#[derive(Default)]
pub struct TextRenderer;

impl TextRenderer {
    const HEADERS: [&'static str; 4] = ["Cohort", "Task", "Start", "Finish"];
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, plan: &TrainingPlan, schedule: &Schedule) -> Result<String, RenderError> {
        let rows: Vec<[String; 4]> = schedule
            .segments
            .iter()
            .map(|s| {
                [
                    s.cohort_id.clone(),
                    s.task_label.clone(),
                    s.start_date.to_string(),
                    s.finish_date.to_string(),
                ]
            })
            .collect();

        let mut widths = Self::HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = format!("{}\n\n", plan.title);
        push_row(&mut out, &Self::HEADERS.map(String::from), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(rule.join("  ").as_str());
        out.push('\n');
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        if rows.is_empty() {
            out.push_str("(no scheduled modules)\n");
        }
        Ok(out)
    }
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cohortplan_core::{Cohort, Module, OffDaysCalendar};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn segment(cohort: &str, module: &Module, start: NaiveDate, finish: NaiveDate) -> ScheduledSegment {
        ScheduledSegment {
            cohort_id: cohort.into(),
            task_label: module.task_label(),
            start_date: start,
            finish_date: finish,
            resource_tag: module.id.clone(),
            display_color: module.color.clone(),
        }
    }

    fn create_test_plan() -> TrainingPlan {
        let mut plan = TrainingPlan::new("Flux des Cohortes");
        plan.modules = vec![
            Module::new("M1", 15).name("Métier et formation").color("#1f77b4"),
            Module::new("M2", 30).name("Santé et Sécurité").color("#d62728"),
        ];
        plan.cohorts = vec![
            Cohort::new("ELEM261 (Day)", date(2026, 8, 24)),
            Cohort::new("ELEM262 (Night)", date(2026, 10, 5)),
        ];
        plan.off_days = OffDaysCalendar::new([date(2026, 9, 7)], [date(2026, 10, 23)]);
        plan
    }

    fn create_test_schedule(plan: &TrainingPlan) -> Schedule {
        let (m1, m2) = (&plan.modules[0], &plan.modules[1]);
        Schedule::new(
            plan.title.clone(),
            vec![
                segment("ELEM261 (Day)", m1, date(2026, 8, 24), date(2026, 8, 27)),
                segment("ELEM261 (Day)", m2, date(2026, 8, 27), date(2026, 9, 3)),
                segment("ELEM262 (Night)", m1, date(2026, 10, 5), date(2026, 10, 8)),
                segment("ELEM262 (Night)", m2, date(2026, 10, 8), date(2026, 10, 15)),
            ],
        )
    }

    #[test]
    fn svg_renderer_creation() {
        let renderer = SvgTimelineRenderer::new();
        assert_eq!(renderer.chart_width, 1000);
        assert!(renderer.show_off_days);
    }

    #[test]
    fn svg_renderer_with_config() {
        let renderer = SvgTimelineRenderer::new()
            .chart_width(1200)
            .row_height(40)
            .hide_off_days();
        assert_eq!(renderer.chart_width, 1200);
        assert_eq!(renderer.row_height, 40);
        assert!(!renderer.show_off_days);
    }

    #[test]
    fn svg_render_produces_valid_svg() {
        let plan = create_test_plan();
        let schedule = create_test_schedule(&plan);
        let svg = SvgTimelineRenderer::new().render(&plan, &schedule).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Flux des Cohortes"));
        assert!(svg.contains("ELEM261 (Day)"));
        assert!(svg.contains("ELEM262 (Night)"));
    }

    #[test]
    fn svg_bars_use_segment_colors() {
        let plan = create_test_plan();
        let schedule = create_test_schedule(&plan);
        let svg = SvgTimelineRenderer::new().render(&plan, &schedule).unwrap();

        assert!(svg.contains("#1f77b4"));
        assert!(svg.contains("#d62728"));
    }

    #[test]
    fn svg_shades_off_days_in_range() {
        let plan = create_test_plan();
        let schedule = create_test_schedule(&plan);

        let shaded = SvgTimelineRenderer::new().render(&plan, &schedule).unwrap();
        assert!(shaded.contains("off-day holiday"));
        assert!(!shaded.contains("off-day pedagogical"));

        let plain = SvgTimelineRenderer::new()
            .hide_off_days()
            .render(&plan, &schedule)
            .unwrap();
        assert!(!plain.contains("off-day"));
    }

    #[test]
    fn svg_render_empty_schedule_fails() {
        let plan = create_test_plan();
        let result = SvgTimelineRenderer::new().render(&plan, &Schedule::default());
        assert!(matches!(result, Err(RenderError::InvalidData(_))));
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate("Short", 20), "Short");
        assert_eq!(truncate("Circuits à courant continu", 10), "Circuits …");
    }

    #[test]
    fn text_renderer_aligns_columns() {
        let plan = create_test_plan();
        let schedule = create_test_schedule(&plan);
        let text = TextRenderer.render(&plan, &schedule).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Flux des Cohortes");
        assert!(lines[2].starts_with("Cohort"));
        assert_eq!(
            lines[4],
            "ELEM261 (Day)    M1: Métier et formation  2026-08-24  2026-08-27"
        );
        assert_eq!(lines.len(), 3 + 1 + 4);
    }

    #[test]
    fn text_renderer_accepts_empty_schedule() {
        let plan = create_test_plan();
        let text = TextRenderer.render(&plan, &Schedule::default()).unwrap();
        assert!(text.contains("(no scheduled modules)"));
    }
}
