//! Built-in data for the 2026-2027 school year.
//!
//! Used by `cohortplan init` to seed a working directory and by tests.

use chrono::NaiveDate;
use std::path::PathBuf;

use cohortplan_core::{
    Cohort, DelayConfig, ModuleRow, Room, TabularSource, TrainingPlan,
    DEFAULT_DAILY_CAPACITY_HOURS,
};

use crate::config::{CalendarConfig, DataConfig, PlanConfig};
use crate::{read_module_rows, read_rooms, LoadError};

/// Default module table file name
pub const MODULES_FILE: &str = "courses_5388.csv";

/// Default room table file name
pub const ROOMS_FILE: &str = "rooms.csv";

/// Sample module table for program 5388
pub const SAMPLE_MODULES_CSV: &str = "\
Module_Number,Course_Code,Course_Name,Hours_Required,Category,Instruction_Hours,Exam_Hours,Recup_Hours,Reprise_Hours
1,M1,Métier et formation,15,M,,,,
2,M2,Santé et sécurité,30,M,,,,
3,C2,Circuits à courant continu,90,C,78,6,3,3
4,M4,Outillage et matériel,45,M,39,3,3,0
5,C5,Lecture de plans,60,C,51,6,3,0
6,C6,Circuits à courant alternatif,105,C,93,6,3,3
7,M7,Installations résidentielles,120,M,108,6,3,3
8,C8,Moteurs et commandes,90,C,78,6,3,3
";

/// Sample room table
pub const SAMPLE_ROOMS_CSV: &str = "\
Room_Code,Room_Name,Capacity,Room_Type
A-101,Atelier électricité 1,20,Atelier
A-102,Atelier électricité 2,20,Atelier
B-204,Classe théorique,28,Classe
L-110,Laboratoire informatique,24,Laboratoire
";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Statutory holidays of the 2026-2027 school year
pub fn holidays_2026_2027() -> Vec<NaiveDate> {
    vec![
        date(2026, 9, 7),   // Labour Day
        date(2026, 10, 12), // Thanksgiving
        date(2027, 4, 19),  // Easter Monday
        date(2027, 5, 24),  // Patriots' Day
        date(2027, 6, 24),  // Saint-Jean-Baptiste
    ]
}

/// Pedagogical days of the 2026-2027 school year (one Friday per month)
pub fn pedagogical_days_2026_2027() -> Vec<NaiveDate> {
    vec![
        date(2026, 9, 25),
        date(2026, 10, 23),
        date(2026, 11, 20),
        date(2026, 12, 11),
        date(2027, 1, 22),
        date(2027, 2, 12),
        date(2027, 3, 19),
        date(2027, 4, 23),
        date(2027, 5, 14),
        date(2027, 6, 11),
    ]
}

/// Cohorts planned for 2026-2027
pub fn cohorts_2026_2027() -> Vec<Cohort> {
    vec![
        Cohort::new("ELEM261 (Day)", date(2026, 8, 24)),
        Cohort::new("ELEM262 (Night)", date(2026, 10, 5)),
        Cohort::new("ELEM263 (Day)", date(2026, 11, 16)),
        Cohort::new("ELEM264 (Night)", date(2027, 1, 25)),
        Cohort::new("ELEM266 (Day)", date(2027, 3, 8)),
    ]
}

/// Complete configuration of the 2026-2027 school year
pub fn school_year_2026_2027() -> PlanConfig {
    PlanConfig {
        title: "Flux des Cohortes 5388 - Année Scolaire 26-27".into(),
        school_year: "2026-2027".into(),
        daily_capacity_hours: DEFAULT_DAILY_CAPACITY_HOURS,
        periods: vec![3, 3],
        data: DataConfig {
            modules: PathBuf::from(MODULES_FILE),
            rooms: Some(PathBuf::from(ROOMS_FILE)),
        },
        delay: DelayConfig::default(),
        calendar: CalendarConfig {
            holidays: holidays_2026_2027(),
            pedagogical_days: pedagogical_days_2026_2027(),
        },
        cohorts: cohorts_2026_2027(),
    }
}

/// The sample tables, served from memory
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleTables;

impl TabularSource for SampleTables {
    type Error = LoadError;

    fn module_rows(&self) -> Result<Vec<ModuleRow>, LoadError> {
        read_module_rows(SAMPLE_MODULES_CSV.as_bytes())
    }

    fn rooms(&self) -> Result<Vec<Room>, LoadError> {
        read_rooms(SAMPLE_ROOMS_CSV.as_bytes())
    }
}

/// The 2026-2027 school year with the sample tables
pub fn sample_plan() -> Result<TrainingPlan, LoadError> {
    school_year_2026_2027().into_plan(&SampleTables)
}
