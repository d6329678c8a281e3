//! # cohortplan-data
//!
//! Loading of everything an allocation pass consumes:
//! - Module and room tables (CSV)
//! - Plan configuration (TOML): school year, cohorts, off-days, delay
//! - A built-in configuration for the 2026-2027 school year
//!
//! ## Example
//!
//! ```rust,ignore
//! use cohortplan_data::load_plan;
//!
//! let plan = load_plan(std::path::Path::new("cohortplan.toml"))?;
//! println!("{} cohorts, {} modules", plan.cohorts.len(), plan.modules.len());
//! ```

pub mod builtin;
pub mod config;
pub mod tables;

pub use config::{CalendarConfig, DataConfig, PlanConfig};
pub use tables::{read_module_rows, read_rooms, CsvSource};

use std::path::{Path, PathBuf};
use thiserror::Error;

use cohortplan_core::{ModuleError, TrainingPlan};

/// Data load failure
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {table} table: {message}")]
    Csv { table: String, message: String },

    #[error("Missing column '{column}' in {table} table")]
    MissingColumn { table: String, column: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Module(#[from] ModuleError),
}

/// Load a plan from a TOML configuration file and the tables it references.
///
/// Relative table paths are resolved against the configuration file's directory.
pub fn load_plan(path: &Path) -> Result<TrainingPlan, LoadError> {
    let config = PlanConfig::load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let source = config.data.source(base);
    config.into_plan(&source)
}
