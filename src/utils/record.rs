use crate::{Cell, Config, Generation, LifeError, Result};
use serde::{Deserialize, Serialize};

/// Persisted form of a [`Generation`].
///
/// `field` holds the live cells as `row:column` pairs joined by `;`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub version: u32,
    pub generation: u64,
    pub field: String,
}

/// Record as read from json, before the presence of every key is checked.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawRecord {
    version: Option<u32>,
    generation: Option<u64>,
    field: Option<String>,
}

impl Record {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(data)?;
        Ok(Self {
            version: raw.version.ok_or(LifeError::MissingInput("Version"))?,
            generation: raw.generation.ok_or(LifeError::MissingInput("Generation"))?,
            field: raw.field.ok_or(LifeError::MissingInput("Field"))?,
        })
    }
}

fn parse_pair(pair: &str) -> Result<Cell> {
    let invalid = || LifeError::Record(pair.to_string());
    let (row, column) = pair.split_once(':').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let column = column.trim().parse().map_err(|_| invalid())?;
    Ok(Cell::new(row, column))
}

impl Generation {
    pub fn to_record(&self) -> Record {
        let field = self
            .sorted_cells()
            .into_iter()
            .map(|cell| format!("{}:{}", cell.row(), cell.column()))
            .collect::<Vec<_>>()
            .join(";");
        Record {
            version: Config::RECORD_VERSION,
            generation: self.generation(),
            field,
        }
    }

    /// Restores the live cells and the generation counter of a record.
    pub fn from_record(record: &Record) -> Result<Self> {
        if record.version != Config::RECORD_VERSION {
            return Err(LifeError::UnsupportedVersion(record.version));
        }
        let mut result = if record.field.trim().is_empty() {
            Generation::new()
        } else {
            record
                .field
                .split(';')
                .map(parse_pair)
                .collect::<Result<Generation>>()?
        };
        result.set_generation(record.generation);
        Ok(result)
    }
}
