//! CSV module and room tables.
//!
//! # Module table
//!
//! ```csv
//! Module_Number,Course_Code,Course_Name,Hours_Required,Category,Instruction_Hours,Exam_Hours,Recup_Hours,Reprise_Hours
//! 1,M1,Métier et formation,15,M,,,,
//! 3,C2,Circuits à courant continu,90,C,78,6,3,3
//! ```
//!
//! The four phase columns are optional, both as columns and as cells.
//!
//! # Room table
//!
//! ```csv
//! Room_Code,Room_Name,Capacity,Room_Type
//! A-101,Atelier électricité,20,Atelier
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use cohortplan_core::{ModuleRow, Room, TabularSource};
use tracing::info;

use crate::LoadError;

const MODULE_COLUMNS: [&str; 5] = [
    "Module_Number",
    "Course_Code",
    "Course_Name",
    "Hours_Required",
    "Category",
];

const ROOM_COLUMNS: [&str; 2] = ["Room_Code", "Room_Name"];

/// Module and room tables stored as CSV files
#[derive(Clone, Debug)]
pub struct CsvSource {
    pub modules_path: PathBuf,
    /// Rooms are optional; an absent table yields no rooms
    pub rooms_path: Option<PathBuf>,
}

impl CsvSource {
    pub fn new(modules_path: impl Into<PathBuf>) -> Self {
        Self {
            modules_path: modules_path.into(),
            rooms_path: None,
        }
    }

    /// Set the room table path
    pub fn rooms(mut self, path: impl Into<PathBuf>) -> Self {
        self.rooms_path = Some(path.into());
        self
    }
}

impl TabularSource for CsvSource {
    type Error = LoadError;

    fn module_rows(&self) -> Result<Vec<ModuleRow>, LoadError> {
        let rows = read_module_rows(open(&self.modules_path)?)?;
        info!(path = %self.modules_path.display(), rows = rows.len(), "loaded module table");
        Ok(rows)
    }

    fn rooms(&self) -> Result<Vec<Room>, LoadError> {
        let Some(path) = &self.rooms_path else {
            return Ok(Vec::new());
        };
        let rooms = read_rooms(open(path)?)?;
        info!(path = %path.display(), rows = rooms.len(), "loaded room table");
        Ok(rooms)
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read module rows from any CSV source, in table order
pub fn read_module_rows<R: Read>(reader: R) -> Result<Vec<ModuleRow>, LoadError> {
    read_table(reader, "module", &MODULE_COLUMNS)
}

/// Read room rows from any CSV source.
///
/// Room codes must be present and unique.
pub fn read_rooms<R: Read>(reader: R) -> Result<Vec<Room>, LoadError> {
    let rooms: Vec<Room> = read_table(reader, "room", &ROOM_COLUMNS)?;

    let mut seen = HashSet::new();
    for room in &rooms {
        if room.code.is_empty() {
            return Err(LoadError::InvalidValue(format!(
                "room '{}' has an empty Room_Code",
                room.name
            )));
        }
        if !seen.insert(room.code.as_str()) {
            return Err(LoadError::InvalidValue(format!(
                "duplicate Room_Code '{}'",
                room.code
            )));
        }
    }
    Ok(rooms)
}

fn read_table<R, T>(reader: R, table: &str, required: &[&'static str]) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: serde::de::DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LoadError::Csv {
            table: table.into(),
            message: e.to_string(),
        })?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn {
                table: table.into(),
                column: *column,
            });
        }
    }

    csv_reader
        .deserialize::<T>()
        .map(|row| {
            row.map_err(|e| LoadError::Csv {
                table: table.into(),
                message: e.to_string(),
            })
        })
        .collect()
}
