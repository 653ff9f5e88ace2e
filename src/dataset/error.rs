//! Error handling for dataset loading
//!
//! Every variant is fatal: the dashboard refuses to start on a bad table.

use super::Iso;
use std::path::PathBuf;
use thiserror::Error;

/// The four source tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Table {
    #[strum(serialize = "totals.csv")]
    Totals,
    #[strum(serialize = "genders.csv")]
    Genders,
    #[strum(serialize = "sectors.csv")]
    Sectors,
    #[strum(serialize = "mpi.csv")]
    Mpi,
}

impl Table {
    /// File name of the table inside the data directory.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file.
    #[error("Malformed CSV in {table}: {source}")]
    Csv {
        table: Table,
        #[source]
        source: csv::Error,
    },

    /// A column the dashboard relies on is not in the header row.
    #[error("{table} is missing required column `{column}`")]
    MissingColumn { table: Table, column: String },

    #[error("{table} row {row}: invalid ISO code `{value}`")]
    InvalidIso {
        table: Table,
        row: usize,
        value: String,
    },

    #[error("{table} row {row}: value `{value}` in column `{column}` is not a number")]
    InvalidNumber {
        table: Table,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{table} lists ISO code {iso} more than once")]
    DuplicateIso { table: Table, iso: Iso },
}
