//! Static country tables
//!
//! Loaded once before the dashboard starts and never mutated afterwards.

pub mod error;
mod iso;
mod records;

pub use error::{DatasetError, Table};
pub use iso::{InvalidIso, Iso};
pub use records::{CountryRecord, GenderBreakdown, MpiRecord, SectorBreakdown};

use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// All tables the views draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Totals in file order; this is also the list view's row order.
    countries: Vec<CountryRecord>,
    country_rows: HashMap<Iso, usize>,
    genders: HashMap<Iso, GenderBreakdown>,
    sectors: HashMap<Iso, SectorBreakdown>,
    mpi: HashMap<Iso, MpiRecord>,
}

impl Dataset {
    /// Loads `totals.csv`, `genders.csv`, `sectors.csv` and `mpi.csv` from `dir`.
    ///
    /// # Errors
    /// Any missing or malformed file is returned as a [`DatasetError`]; there is no partial load.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        info!("Loading dataset from {}", dir.display());
        let dataset = Self::from_readers(
            open(dir, Table::Totals)?,
            open(dir, Table::Genders)?,
            open(dir, Table::Sectors)?,
            open(dir, Table::Mpi)?,
        )?;
        info!(
            "Loaded {} countries ({} with gender data, {} with sector data)",
            dataset.countries.len(),
            dataset.genders.len(),
            dataset.sectors.len()
        );
        Ok(dataset)
    }

    /// Builds a dataset from already opened tables.
    pub fn from_readers(
        totals: impl Read,
        genders: impl Read,
        sectors: impl Read,
        mpi: impl Read,
    ) -> Result<Self, DatasetError> {
        let countries = records::read_totals(totals)?;
        let country_rows = index_unique(Table::Totals, &countries, |c| &c.iso)?;

        let genders = records::read_genders(genders)?;
        let genders = into_keyed(Table::Genders, genders, |g| &g.iso)?;

        let sectors = records::read_sectors(sectors)?;
        let sectors = into_keyed(Table::Sectors, sectors, |s| &s.iso)?;

        let mpi = records::read_mpi(mpi)?;
        let mpi = into_keyed(Table::Mpi, mpi, |m| &m.iso)?;

        Ok(Self {
            countries,
            country_rows,
            genders,
            sectors,
            mpi,
        })
    }

    /// Every country of the totals table, in file order.
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn country(&self, iso: &Iso) -> Option<&CountryRecord> {
        self.row_index(iso).map(|idx| &self.countries[idx])
    }

    /// Position of `iso` in the totals ordering.
    pub fn row_index(&self, iso: &Iso) -> Option<usize> {
        self.country_rows.get(iso).copied()
    }

    pub fn gender(&self, iso: &Iso) -> Option<&GenderBreakdown> {
        self.genders.get(iso)
    }

    pub fn sector(&self, iso: &Iso) -> Option<&SectorBreakdown> {
        self.sectors.get(iso)
    }

    pub fn mpi(&self, iso: &Iso) -> Option<&MpiRecord> {
        self.mpi.get(iso)
    }

    /// Display name for `iso`: totals first, then the sector and gender tables.
    pub fn country_name(&self, iso: &Iso) -> Option<&str> {
        self.country(iso)
            .map(|c| c.country.as_str())
            .or_else(|| self.sector(iso).map(|s| s.country.as_str()))
            .or_else(|| self.gender(iso).map(|g| g.country.as_str()))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

fn open(dir: &Path, table: Table) -> Result<BufReader<File>, DatasetError> {
    let path = dir.join(table.file_name());
    debug!("Opening {}", path.display());
    File::open(&path)
        .map(BufReader::new)
        .map_err(|source| DatasetError::Io { path, source })
}

fn index_unique<T>(
    table: Table,
    rows: &[T],
    key: impl Fn(&T) -> &Iso,
) -> Result<HashMap<Iso, usize>, DatasetError> {
    let mut index = HashMap::with_capacity(rows.len());
    for (pos, row) in rows.iter().enumerate() {
        let iso = key(row);
        if index.insert(iso.clone(), pos).is_some() {
            return Err(DatasetError::DuplicateIso {
                table,
                iso: iso.clone(),
            });
        }
    }
    Ok(index)
}

fn into_keyed<T>(
    table: Table,
    rows: Vec<T>,
    key: impl Fn(&T) -> &Iso,
) -> Result<HashMap<Iso, T>, DatasetError> {
    let mut keyed = HashMap::with_capacity(rows.len());
    for row in rows {
        let iso = key(&row).clone();
        if keyed.contains_key(&iso) {
            return Err(DatasetError::DuplicateIso { table, iso });
        }
        keyed.insert(iso, row);
    }
    Ok(keyed)
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small in-memory tables shared by the unit tests.

    use super::*;

    pub const TOTALS: &str = "\
country,ISO,MPI,GII
Albania,ALB,0.005,0.238
Mali,MLI,0.457,0.678
Kenya,KEN,0.187,0.549
Philippines,PHL,0.052,
";

    /// Kenya has no gender row.
    pub const GENDERS: &str = "\
country,ISO,Female,Male,Mixed
Albania,ALB,120,80,4
Mali,MLI,2100,900,310
Philippines,PHL,15000,900,12
";

    /// Philippines has no sector row.
    pub const SECTORS: &str = "\
,ISO,country,Agriculture,Food,Retail
0,ALB,Albania,40,30,20
1,MLI,Mali,1200,800,600
2,KEN,Kenya,5000,3000,2500
";

    pub const MPI: &str = "\
country,ISO,MPI
Albania,ALB,0.005
Mali,MLI,0.457
Kenya,KEN,0.187
";

    pub fn iso(code: &str) -> Iso {
        code.parse().unwrap()
    }

    pub fn sample() -> Dataset {
        Dataset::from_readers(
            TOTALS.as_bytes(),
            GENDERS.as_bytes(),
            SECTORS.as_bytes(),
            MPI.as_bytes(),
        )
        .unwrap()
    }

    /// Writes the sample tables into `dir` as CSV files.
    pub fn write_to(dir: &Path) {
        std::fs::write(dir.join("totals.csv"), TOTALS).unwrap();
        std::fs::write(dir.join("genders.csv"), GENDERS).unwrap();
        std::fs::write(dir.join("sectors.csv"), SECTORS).unwrap();
        std::fs::write(dir.join("mpi.csv"), MPI).unwrap();
    }
}
