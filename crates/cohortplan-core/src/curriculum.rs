//! Curriculum sequence for program 5388
//!
//! Every cohort follows the same ordered module list: a fixed three-module
//! opening (the fused Week 1 pair, then Week 2) followed by the rows of the
//! module table whose `Module_Number` is greater than 2, in table order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Module, ModuleError, PhaseHours};

/// Color of table modules whose category contains `M`
pub const MODULE_COLOR: &str = "#2ca02c";

/// Color of every other table module
pub const COURSE_COLOR: &str = "#9467bd";

/// One row of the module table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRow {
    /// Sequencing hint; rows numbered 1 and 2 are covered by the fixed prefix
    #[serde(rename = "Module_Number")]
    pub module_number: i64,
    #[serde(rename = "Course_Code")]
    pub course_code: String,
    #[serde(rename = "Course_Name")]
    pub course_name: String,
    #[serde(rename = "Hours_Required")]
    pub hours_required: i64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Instruction_Hours", default)]
    pub instruction_hours: Option<u32>,
    #[serde(rename = "Exam_Hours", default)]
    pub exam_hours: Option<u32>,
    #[serde(rename = "Recup_Hours", default)]
    pub recup_hours: Option<u32>,
    #[serde(rename = "Reprise_Hours", default)]
    pub reprise_hours: Option<u32>,
}

impl ModuleRow {
    pub fn new(
        module_number: i64,
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        hours_required: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            module_number,
            course_code: course_code.into(),
            course_name: course_name.into(),
            hours_required,
            category: category.into(),
            instruction_hours: None,
            exam_hours: None,
            recup_hours: None,
            reprise_hours: None,
        }
    }

    /// Phase breakdown, present when any phase column is filled
    pub fn phases(&self) -> Option<PhaseHours> {
        let any = self.instruction_hours.is_some()
            || self.exam_hours.is_some()
            || self.recup_hours.is_some()
            || self.reprise_hours.is_some();
        any.then(|| PhaseHours {
            instruction: self.instruction_hours.unwrap_or(0),
            exam: self.exam_hours.unwrap_or(0),
            recovery: self.recup_hours.unwrap_or(0),
            reprise: self.reprise_hours.unwrap_or(0),
        })
    }

    /// Convert the row into a validated module
    pub fn to_module(&self) -> Result<Module, ModuleError> {
        let mut module = Module::new(self.course_code.trim(), self.hours_required)
            .name(self.course_name.trim())
            .category(self.category.trim())
            .color(category_color(&self.category));
        module.phases = self.phases();
        module.validate()?;
        Ok(module)
    }
}

/// Display color for a table module
pub fn category_color(category: &str) -> &'static str {
    if category.contains('M') {
        MODULE_COLOR
    } else {
        COURSE_COLOR
    }
}

/// The fixed opening of the 5388 sequence
///
/// `M1` and `MATH` share Week 1; `M2` starts Week 2.
pub fn standard_prefix() -> Vec<Module> {
    vec![
        Module::new("M1", 15)
            .name("Métier et formation")
            .category("M")
            .color("#1f77b4"),
        Module::new("MATH", 15)
            .name("Mathématique (P1)")
            .category("C")
            .color("#ff7f0e"),
        Module::new("M2", 30)
            .name("Santé et Sécurité")
            .category("M")
            .color("#d62728"),
    ]
}

/// Build the ordered module sequence from the fixed prefix and the table rows
pub fn build_sequence(rows: &[ModuleRow]) -> Result<Vec<Module>, ModuleError> {
    build_sequence_with_prefix(standard_prefix(), rows)
}

/// Same as [`build_sequence`] with a caller-supplied prefix
pub fn build_sequence_with_prefix(
    prefix: Vec<Module>,
    rows: &[ModuleRow],
) -> Result<Vec<Module>, ModuleError> {
    let mut sequence = prefix;
    for row in rows.iter().filter(|r| r.module_number > 2) {
        sequence.push(row.to_module()?);
    }

    let mut seen = HashSet::new();
    for module in &sequence {
        module.validate()?;
        if !seen.insert(module.id.as_str()) {
            return Err(ModuleError::DuplicateId(module.id.clone()));
        }
    }

    Ok(sequence)
}
