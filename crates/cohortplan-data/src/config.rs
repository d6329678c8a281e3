//! Plan configuration (TOML).
//!
//! ```toml
//! title = "Flux des Cohortes 5388 - Année Scolaire 26-27"
//! school_year = "2026-2027"
//! daily_capacity_hours = 6
//! periods = [3, 3]
//!
//! [data]
//! modules = "courses_5388.csv"
//! rooms = "rooms.csv"
//!
//! [delay]
//! weeks = 1
//! module = "C2"
//! mode = "ignore"
//!
//! [calendar]
//! holidays = ["2026-09-07", "2026-10-12"]
//! pedagogical_days = ["2026-09-25"]
//!
//! [[cohorts]]
//! id = "ELEM261 (Day)"
//! start = "2026-08-24"
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cohortplan_core::{
    build_sequence, Cohort, DelayConfig, OffDaysCalendar, PeriodLayout, TabularSource,
    TrainingPlan, DEFAULT_DAILY_CAPACITY_HOURS, MAX_DELAY_WEEKS,
};

use crate::{CsvSource, LoadError};

/// Root of the configuration file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    pub title: String,
    #[serde(default)]
    pub school_year: String,
    #[serde(default = "default_capacity")]
    pub daily_capacity_hours: u32,
    /// Hours of each daily period (P1, P2, ...)
    #[serde(default = "default_periods")]
    pub periods: Vec<u32>,
    pub data: DataConfig,
    #[serde(default)]
    pub delay: DelayConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub cohorts: Vec<Cohort>,
}

fn default_capacity() -> u32 {
    DEFAULT_DAILY_CAPACITY_HOURS
}

fn default_periods() -> Vec<u32> {
    PeriodLayout::default().periods
}

/// Location of the module and room tables
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub modules: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<PathBuf>,
}

impl DataConfig {
    /// CSV source with paths resolved against `base`
    pub fn source(&self, base: &Path) -> CsvSource {
        let mut source = CsvSource::new(base.join(&self.modules));
        if let Some(rooms) = &self.rooms {
            source = source.rooms(base.join(rooms));
        }
        source
    }
}

/// Off-days of the school year
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    #[serde(default)]
    pub pedagogical_days: Vec<NaiveDate>,
}

impl CalendarConfig {
    pub fn to_calendar(&self) -> OffDaysCalendar {
        OffDaysCalendar::new(
            self.holidays.iter().copied(),
            self.pedagogical_days.iter().copied(),
        )
    }
}

impl PlanConfig {
    /// Parse and validate a configuration document
    pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
        let config: PlanConfig =
            toml::from_str(input).map_err(|e| LoadError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let input = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, LoadError> {
        toml::to_string_pretty(self).map_err(|e| LoadError::Config(e.to_string()))
    }

    /// Check the values serde cannot check
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.title.trim().is_empty() {
            return Err(LoadError::InvalidValue("title must not be empty".into()));
        }
        if self.daily_capacity_hours == 0 {
            return Err(LoadError::InvalidValue(
                "daily_capacity_hours must be positive".into(),
            ));
        }
        let period_total: u32 = self.periods.iter().sum();
        if self.periods.is_empty() || self.periods.contains(&0) {
            return Err(LoadError::InvalidValue(
                "periods must list positive hours".into(),
            ));
        }
        if period_total != self.daily_capacity_hours {
            return Err(LoadError::InvalidValue(format!(
                "periods {:?} sum to {}h but daily_capacity_hours is {}h",
                self.periods, period_total, self.daily_capacity_hours
            )));
        }
        if self.delay.weeks > MAX_DELAY_WEEKS {
            return Err(LoadError::InvalidValue(format!(
                "delay.weeks must be between 0 and {}, got {}",
                MAX_DELAY_WEEKS, self.delay.weeks
            )));
        }
        let mut seen = HashSet::new();
        for cohort in &self.cohorts {
            if cohort.id.trim().is_empty() {
                return Err(LoadError::InvalidValue("cohort id must not be empty".into()));
            }
            if !seen.insert(cohort.id.as_str()) {
                return Err(LoadError::InvalidValue(format!(
                    "duplicate cohort id '{}'",
                    cohort.id
                )));
            }
        }
        Ok(())
    }

    /// Assemble a training plan from this configuration and a table source
    pub fn into_plan<S>(self, source: &S) -> Result<TrainingPlan, LoadError>
    where
        S: TabularSource<Error = LoadError>,
    {
        let rows = source.module_rows()?;
        let modules = build_sequence(&rows)?;
        let rooms = source.rooms()?;

        Ok(TrainingPlan {
            off_days: self.calendar.to_calendar(),
            title: self.title,
            school_year: self.school_year,
            cohorts: self.cohorts,
            modules,
            daily_capacity_hours: self.daily_capacity_hours,
            periods: PeriodLayout::new(self.periods),
            delay: self.delay,
            rooms,
        })
    }
}
