//! Row types for the four source tables and their CSV readers

use super::error::{DatasetError, Table};
use super::Iso;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One country of the totals table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub iso: Iso,
    pub country: String,
    pub mpi: Option<f64>,
    pub gii: Option<f64>,
}

/// One row of the MPI-only table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MpiRecord {
    pub iso: Iso,
    pub country: String,
    pub mpi: Option<f64>,
}

/// Loan counts per borrower gender group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderBreakdown {
    pub iso: Iso,
    pub country: String,
    pub female: f64,
    pub male: f64,
    pub mixed: f64,
}

impl GenderBreakdown {
    /// Category/value pairs in display order.
    pub fn categories(&self) -> [(&'static str, f64); 3] {
        [
            ("Female", self.female),
            ("Male", self.male),
            ("Mixed", self.mixed),
        ]
    }
}

/// Loan counts per sector, in the column order of the source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBreakdown {
    pub iso: Iso,
    pub country: String,
    pub sectors: Vec<(String, f64)>,
}

#[derive(Debug, Deserialize)]
struct TotalsRow {
    country: String,
    #[serde(rename = "ISO")]
    iso: String,
    #[serde(rename = "MPI")]
    mpi: Option<f64>,
    #[serde(rename = "GII")]
    gii: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MpiRow {
    country: String,
    #[serde(rename = "ISO")]
    iso: String,
    #[serde(rename = "MPI")]
    mpi: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GenderRow {
    country: String,
    #[serde(rename = "ISO")]
    iso: String,
    #[serde(rename = "Female")]
    female: Option<f64>,
    #[serde(rename = "Male")]
    male: Option<f64>,
    #[serde(rename = "Mixed")]
    mixed: Option<f64>,
}

const TOTALS_COLUMNS: &[&str] = &["country", "ISO", "MPI", "GII"];
const MPI_COLUMNS: &[&str] = &["country", "ISO", "MPI"];
const GENDER_COLUMNS: &[&str] = &["country", "ISO", "Female", "Male", "Mixed"];
const SECTOR_KEY_COLUMNS: &[&str] = &["country", "ISO"];

pub fn read_totals<R: Read>(reader: R) -> Result<Vec<CountryRecord>, DatasetError> {
    read_rows::<_, TotalsRow, _>(Table::Totals, reader, TOTALS_COLUMNS, |row, iso| {
        CountryRecord {
            iso,
            country: row.country,
            mpi: row.mpi.filter(|v| !v.is_nan()),
            gii: row.gii.filter(|v| !v.is_nan()),
        }
    })
}

pub fn read_mpi<R: Read>(reader: R) -> Result<Vec<MpiRecord>, DatasetError> {
    read_rows::<_, MpiRow, _>(Table::Mpi, reader, MPI_COLUMNS, |row, iso| MpiRecord {
        iso,
        country: row.country,
        mpi: row.mpi.filter(|v| !v.is_nan()),
    })
}

pub fn read_genders<R: Read>(reader: R) -> Result<Vec<GenderBreakdown>, DatasetError> {
    read_rows::<_, GenderRow, _>(Table::Genders, reader, GENDER_COLUMNS, |row, iso| {
        GenderBreakdown {
            iso,
            country: row.country,
            female: row.female.unwrap_or(0.0),
            male: row.male.unwrap_or(0.0),
            mixed: row.mixed.unwrap_or(0.0),
        }
    })
}

/// Sector columns vary between exports, so this table is read untyped: every column that
/// is not `ISO`, `country` or a leftover index column is a sector.
pub fn read_sectors<R: Read>(reader: R) -> Result<Vec<SectorBreakdown>, DatasetError> {
    let table = Table::Sectors;
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|source| DatasetError::Csv { table, source })?
        .clone();
    require_columns(table, &headers, SECTOR_KEY_COLUMNS)?;

    let iso_idx = column_index(&headers, "ISO");
    let country_idx = column_index(&headers, "country");
    let sector_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| {
            Some(*idx) != iso_idx && Some(*idx) != country_idx && !is_index_column(name)
        })
        .collect();

    let mut out = Vec::new();
    for (row_no, record) in rdr.records().enumerate() {
        let record = record.map_err(|source| DatasetError::Csv { table, source })?;
        let row = row_no + 1;
        let iso = parse_iso(table, row, field(&record, iso_idx))?;
        let mut sectors = Vec::with_capacity(sector_columns.len());
        for (idx, name) in &sector_columns {
            let raw = record.get(*idx).unwrap_or("");
            let count = if raw.is_empty() {
                0.0
            } else {
                raw.parse::<f64>()
                    .map_err(|_| DatasetError::InvalidNumber {
                        table,
                        row,
                        column: name.to_string(),
                        value: raw.to_string(),
                    })?
            };
            sectors.push((name.to_string(), count));
        }
        out.push(SectorBreakdown {
            iso,
            country: field(&record, country_idx).to_string(),
            sectors,
        });
    }
    Ok(out)
}

fn read_rows<R, T, F>(
    table: Table,
    reader: R,
    required: &[&str],
    build: F,
) -> Result<Vec<T::Output>, DatasetError>
where
    R: Read,
    T: for<'de> Deserialize<'de> + IsoKeyed,
    F: Fn(T, Iso) -> T::Output,
{
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|source| DatasetError::Csv { table, source })?
        .clone();
    require_columns(table, &headers, required)?;

    let mut out = Vec::new();
    for (row_no, row) in rdr.deserialize::<T>().enumerate() {
        let row = row.map_err(|source| DatasetError::Csv { table, source })?;
        let iso = parse_iso(table, row_no + 1, row.raw_iso())?;
        out.push(build(row, iso));
    }
    Ok(out)
}

/// Typed rows expose their raw ISO cell so validation errors can name the row.
trait IsoKeyed {
    type Output;
    fn raw_iso(&self) -> &str;
}

impl IsoKeyed for TotalsRow {
    type Output = CountryRecord;
    fn raw_iso(&self) -> &str {
        &self.iso
    }
}

impl IsoKeyed for MpiRow {
    type Output = MpiRecord;
    fn raw_iso(&self) -> &str {
        &self.iso
    }
}

impl IsoKeyed for GenderRow {
    type Output = GenderBreakdown;
    fn raw_iso(&self) -> &str {
        &self.iso
    }
}

fn require_columns(
    table: Table,
    headers: &StringRecord,
    required: &[&str],
) -> Result<(), DatasetError> {
    for column in required {
        if column_index(headers, column).is_none() {
            return Err(DatasetError::MissingColumn {
                table,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn field(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

/// pandas writes its row index as an unnamed first column.
fn is_index_column(name: &str) -> bool {
    name.is_empty() || name.starts_with("Unnamed:") || name == "index"
}

fn parse_iso(table: Table, row: usize, raw: &str) -> Result<Iso, DatasetError> {
    raw.parse().map_err(|_| DatasetError::InvalidIso {
        table,
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_keeps_file_order_and_nulls() {
        let csv = "country,ISO,MPI,GII\nMali,MLI,0.457,0.678\nKenya,KEN,,0.549\n";
        let rows = read_totals(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "Mali");
        assert_eq!(rows[1].iso.as_str(), "KEN");
        assert_eq!(rows[1].mpi, None);
        assert_eq!(rows[1].gii, Some(0.549));
    }

    #[test]
    fn test_totals_ignores_extra_columns() {
        let csv = ",country,ISO,MPI,GII,region\n0,Mali,MLI,0.457,0.678,Africa\n";
        let rows = read_totals(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].mpi, Some(0.457));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "country,ISO,MPI\nMali,MLI,0.457\n";
        let err = read_totals(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { table: Table::Totals, ref column } if column == "GII"
        ));
    }

    #[test]
    fn test_bad_iso_names_the_row() {
        let csv = "country,ISO,Female,Male,Mixed\nMali,MLI,1,2,3\nNowhere,N0,1,1,1\n";
        let err = read_genders(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidIso { row: 2, .. }));
    }

    #[test]
    fn test_non_numeric_metric_is_malformed() {
        let csv = "country,ISO,MPI,GII\nMali,MLI,high,0.678\n";
        assert!(matches!(
            read_totals(csv.as_bytes()),
            Err(DatasetError::Csv { .. })
        ));
    }

    #[test]
    fn test_sectors_skip_key_and_index_columns() {
        let csv = ",ISO,country,Agriculture,Food,Retail\n0,MLI,Mali,10,5,\n";
        let rows = read_sectors(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].country, "Mali");
        assert_eq!(
            rows[0].sectors,
            vec![
                ("Agriculture".to_string(), 10.0),
                ("Food".to_string(), 5.0),
                ("Retail".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn test_sectors_reject_garbage_counts() {
        let csv = "ISO,country,Agriculture\nMLI,Mali,lots\n";
        let err = read_sectors(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidNumber { row: 1, ref column, .. } if column == "Agriculture"
        ));
    }

    #[test]
    fn test_gender_categories_order() {
        let csv = "country,ISO,Female,Male,Mixed\nMali,MLI,7,2,1\n";
        let rows = read_genders(csv.as_bytes()).unwrap();
        let cats = rows[0].categories();
        assert_eq!(cats[0], ("Female", 7.0));
        assert_eq!(cats[2], ("Mixed", 1.0));
    }
}
