//! Standalone HTML timeline page
//!
//! One self-contained HTML file holding:
//! - The plan title
//! - An inline SVG timeline (one row per cohort, hover titles on every bar)
//! - A module legend
//! - The detail table (Cohort, Task, Start, Finish)

use cohortplan_core::{RenderError, Renderer, Schedule, ScheduledSegment, TrainingPlan};

use crate::layout::TimelineLayout;
use crate::truncate;

/// HTML timeline renderer configuration
#[derive(Clone, Debug)]
pub struct HtmlTimelineRenderer {
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
    pub theme: TimelineTheme,
    /// Shade holidays and pedagogical days
    pub show_off_days: bool,
    /// Append the detail table below the chart
    pub show_details: bool,
}

/// Color theme for the timeline page
#[derive(Clone, Debug)]
pub struct TimelineTheme {
    pub background_color: String,
    pub grid_color: String,
    pub text_color: String,
    pub header_bg: String,
    pub holiday_color: String,
    pub pedagogical_color: String,
    pub table_stripe: String,
}

impl Default for TimelineTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl TimelineTheme {
    pub fn light() -> Self {
        Self {
            background_color: "#ffffff".into(),
            grid_color: "#ecf0f1".into(),
            text_color: "#2c3e50".into(),
            header_bg: "#f8f9fa".into(),
            holiday_color: "#e74c3c".into(),
            pedagogical_color: "#f1c40f".into(),
            table_stripe: "#f4f6f8".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background_color: "#1a1a2e".into(),
            grid_color: "#2d2d44".into(),
            text_color: "#eaeaea".into(),
            header_bg: "#16213e".into(),
            holiday_color: "#c0392b".into(),
            pedagogical_color: "#b7950b".into(),
            table_stripe: "#22223a".into(),
        }
    }
}

impl Default for HtmlTimelineRenderer {
    fn default() -> Self {
        Self {
            chart_width: 1100,
            row_height: 36,
            label_width: 170,
            header_height: 50,
            padding: 20,
            theme: TimelineTheme::default(),
            show_off_days: true,
            show_details: true,
        }
    }
}

impl HtmlTimelineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use dark theme
    pub fn dark_theme(mut self) -> Self {
        self.theme = TimelineTheme::dark();
        self
    }

    /// Configure chart width
    pub fn chart_width(mut self, width: u32) -> Self {
        self.chart_width = width;
        self
    }

    /// Render the chart only
    pub fn hide_details(mut self) -> Self {
        self.show_details = false;
        self
    }

    fn chart_top(&self) -> u32 {
        self.padding + self.header_height
    }

    /// Generate the complete HTML document
    fn generate_html(
        &self,
        plan: &TrainingPlan,
        schedule: &Schedule,
        cohorts: &[&str],
        layout: &TimelineLayout,
    ) -> String {
        let total_width = self.padding * 2 + self.label_width + self.chart_width;
        let total_height = self.chart_top() + cohorts.len() as u32 * self.row_height + self.padding;

        let svg_content = self.generate_svg(plan, schedule, cohorts, layout);
        let legend = self.generate_legend(plan);
        let details = if self.show_details {
            self.generate_details(schedule)
        } else {
            String::new()
        };

        let subtitle = if plan.school_year.is_empty() {
            String::new()
        } else {
            format!(
                "\n            <p class=\"subtitle\">{}</p>",
                html_escape(&plan.school_year)
            )
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="timeline-container">
        <div class="timeline-header">
            <h1>{title}</h1>{subtitle}
        </div>
        <div class="timeline-wrapper">
            <svg id="timeline-svg" xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
{svg_content}
            </svg>
        </div>
        <div class="timeline-legend">
{legend}
        </div>
{details}
    </div>
</body>
</html>"#,
            title = html_escape(&plan.title),
            subtitle = subtitle,
            css = self.generate_css(),
            width = total_width,
            height = total_height,
            svg_content = svg_content,
            legend = legend,
            details = details,
        )
    }

    /// SVG body (without the outer <svg> tag)
    fn generate_svg(
        &self,
        plan: &TrainingPlan,
        schedule: &Schedule,
        cohorts: &[&str],
        layout: &TimelineLayout,
    ) -> String {
        let mut svg = String::new();

        svg.push_str(&format!(
            r#"                <rect width="100%" height="100%" fill="{}"/>"#,
            self.theme.background_color
        ));
        svg.push('\n');

        svg.push_str(&self.render_grid(plan, cohorts.len(), layout));
        svg.push_str(&self.render_header(layout));

        for (row, cohort_id) in cohorts.iter().enumerate() {
            svg.push_str(&self.render_cohort_row(
                cohort_id,
                schedule.segments_for(cohort_id),
                row,
                layout,
            ));
        }

        svg
    }

    /// Month ticks and labels
    fn render_header(&self, layout: &TimelineLayout) -> String {
        let mut svg = String::new();

        svg.push_str(&format!(
            r#"                <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.padding,
            self.padding,
            self.label_width + self.chart_width,
            self.header_height,
            self.theme.header_bg
        ));
        svg.push('\n');

        for month in layout.month_starts() {
            let x = layout.x(month);
            svg.push_str(&format!(
                r#"                <line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="1"/>"#,
                x = x,
                y1 = self.chart_top() - 10,
                y2 = self.chart_top(),
                color = self.theme.text_color
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"                <text x="{x}" y="{y}" font-size="11" fill="{color}">{label}</text>"#,
                x = x + 4.0,
                y = self.chart_top() - 15,
                color = self.theme.text_color,
                label = month.format("%b %Y")
            ));
            svg.push('\n');
        }

        svg
    }

    /// Row separators, month lines and off-day shading
    fn render_grid(&self, plan: &TrainingPlan, rows: usize, layout: &TimelineLayout) -> String {
        let mut svg = String::new();
        let top = self.chart_top();
        let bottom = top + rows as u32 * self.row_height;

        if self.show_off_days {
            for (date, kind) in plan.off_days.iter().filter(|(d, _)| layout.contains(*d)) {
                let color = match kind {
                    cohortplan_core::OffDayKind::Holiday => &self.theme.holiday_color,
                    cohortplan_core::OffDayKind::PedagogicalDay => &self.theme.pedagogical_color,
                };
                svg.push_str(&format!(
                    r#"                <rect class="off-day" x="{x}" y="{y}" width="{w}" height="{h}" fill="{color}" opacity="0.3"><title>{date} - {kind}</title></rect>"#,
                    x = layout.x(date),
                    y = top,
                    w = layout.px_per_day.max(1.0),
                    h = bottom - top,
                    color = color,
                    date = date,
                    kind = kind,
                ));
                svg.push('\n');
            }
        }

        for i in 0..=rows {
            let y = top + i as u32 * self.row_height;
            svg.push_str(&format!(
                r#"                <line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{color}" stroke-width="1"/>"#,
                x1 = self.padding,
                y = y,
                x2 = self.padding + self.label_width + self.chart_width,
                color = self.theme.grid_color
            ));
            svg.push('\n');
        }

        for month in layout.month_starts() {
            svg.push_str(&format!(
                r#"                <line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="1"/>"#,
                x = layout.x(month),
                y1 = top,
                y2 = bottom,
                color = self.theme.grid_color
            ));
            svg.push('\n');
        }

        svg
    }

    /// Cohort label and its bars, each with a hover title
    fn render_cohort_row<'a>(
        &self,
        cohort_id: &str,
        segments: impl Iterator<Item = &'a ScheduledSegment>,
        row: usize,
        layout: &TimelineLayout,
    ) -> String {
        let mut svg = String::new();

        let y = self.chart_top() + row as u32 * self.row_height;
        let bar_height = (f64::from(self.row_height) * 0.6) as u32;
        let bar_y = y + (self.row_height - bar_height) / 2;

        svg.push_str(&format!(
            r#"                <text x="{x}" y="{y}" font-size="12" fill="{color}">{label}</text>"#,
            x = self.padding + 8,
            y = y + self.row_height / 2 + 4,
            color = self.theme.text_color,
            label = html_escape(&truncate(cohort_id, 24))
        ));
        svg.push('\n');

        for segment in segments {
            let x = layout.x(segment.start_date);
            let width = layout
                .width(segment.start_date, segment.finish_date)
                .max(2.0);
            svg.push_str(&format!(
                r#"                <rect class="segment" x="{x}" y="{y}" width="{w}" height="{h}" rx="2" fill="{color}" data-cohort="{cohort}" data-module="{module}"><title>{cohort} | {task} | {start} → {finish}</title></rect>"#,
                x = x,
                y = bar_y,
                w = width,
                h = bar_height,
                color = html_escape(&segment.display_color),
                cohort = html_escape(cohort_id),
                module = html_escape(&segment.resource_tag),
                task = html_escape(&segment.task_label),
                start = segment.start_date,
                finish = segment.last_day(),
            ));
            svg.push('\n');
        }

        svg
    }

    fn generate_legend(&self, plan: &TrainingPlan) -> String {
        plan.modules
            .iter()
            .map(|m| {
                format!(
                    r#"            <span class="legend-item"><span class="legend-box" style="background:{color}"></span>{label}</span>"#,
                    color = html_escape(&m.color),
                    label = html_escape(&m.task_label())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Detail table, one row per segment
    fn generate_details(&self, schedule: &Schedule) -> String {
        let mut rows = String::new();
        for segment in &schedule.segments {
            rows.push_str(&format!(
                r#"                <tr><td>{cohort}</td><td><span class="legend-box" style="background:{color}"></span>{task}</td><td>{start}</td><td>{finish}</td></tr>
"#,
                cohort = html_escape(&segment.cohort_id),
                color = html_escape(&segment.display_color),
                task = html_escape(&segment.task_label),
                start = segment.start_date,
                finish = segment.finish_date,
            ));
        }

        format!(
            r#"        <table class="details">
            <thead>
                <tr><th>Cohort</th><th>Task</th><th>Start</th><th>Finish</th></tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>"#
        )
    }

    fn generate_css(&self) -> String {
        format!(
            r#"        :root {{
            --bg-color: {bg};
            --text-color: {text};
            --stripe-color: {stripe};
        }}
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: var(--bg-color);
            color: var(--text-color);
            padding: 20px;
        }}
        .timeline-header {{ margin-bottom: 16px; }}
        .timeline-header h1 {{ font-size: 1.5rem; font-weight: 600; }}
        .subtitle {{ opacity: 0.7; }}
        .timeline-wrapper {{
            overflow-x: auto;
            border: 1px solid rgba(128,128,128,0.3);
            border-radius: 8px;
        }}
        .segment {{ cursor: pointer; transition: opacity 0.2s; }}
        .segment:hover {{ opacity: 0.8; }}
        .timeline-legend {{
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            margin: 16px 0;
            font-size: 13px;
        }}
        .legend-item {{ display: flex; align-items: center; gap: 6px; }}
        .legend-box {{
            display: inline-block;
            width: 14px;
            height: 10px;
            border-radius: 2px;
            margin-right: 6px;
        }}
        table.details {{ border-collapse: collapse; font-size: 13px; }}
        table.details th, table.details td {{
            padding: 4px 12px;
            text-align: left;
            border-bottom: 1px solid rgba(128,128,128,0.3);
        }}
        table.details tbody tr:nth-child(even) {{ background: var(--stripe-color); }}"#,
            bg = self.theme.background_color,
            text = self.theme.text_color,
            stripe = self.theme.table_stripe,
        )
    }
}

impl Renderer for HtmlTimelineRenderer {
    type Output = String;

    fn render(&self, plan: &TrainingPlan, schedule: &Schedule) -> Result<String, RenderError> {
        let left = f64::from(self.padding + self.label_width);
        let layout = TimelineLayout::new(schedule, left, self.chart_width)
            .ok_or_else(|| RenderError::InvalidData("No segments to render".into()))?;
        let cohorts = schedule.cohort_ids();

        Ok(self.generate_html(plan, schedule, &cohorts, &layout))
    }
}

/// HTML-escape a string
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
