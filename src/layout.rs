//! Static page description
//!
//! Everything the browser needs for the first paint: fixed texts, dropdown options, the
//! list view's rows and the current render of every view.

use crate::consts::cli_consts::{PAGE_SUBTITLE, PAGE_TITLE};
use crate::dataset::{CountryRecord, Iso};
use crate::dispatch::{Dispatcher, ViewUpdate};
use crate::state::{Metric, ViewState};
use serde::Serialize;
use strum::IntoEnumIterator;

pub const TABLE_COLUMNS: [&str; 4] = ["Country", "ISO", "MPI", "GII"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricOption {
    pub label: &'static str,
    pub value: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "ISO")]
    pub iso: Iso,
    #[serde(rename = "MPI")]
    pub mpi: Option<f64>,
    #[serde(rename = "GII")]
    pub gii: Option<f64>,
}

impl From<&CountryRecord> for TableRow {
    fn from(record: &CountryRecord) -> Self {
        Self {
            country: record.country.clone(),
            iso: record.iso.clone(),
            mpi: record.mpi,
            gii: record.gii,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub metrics: Vec<MetricOption>,
    pub table: TableData,
    pub state: ViewState,
    pub views: Vec<ViewUpdate>,
}

impl PageLayout {
    pub fn build(dispatcher: &Dispatcher) -> Self {
        let rows = dispatcher
            .dataset()
            .countries()
            .iter()
            .map(TableRow::from)
            .collect();
        Self {
            title: PAGE_TITLE,
            subtitle: PAGE_SUBTITLE,
            metrics: Metric::iter()
                .map(|value| MetricOption {
                    label: value.label(),
                    value,
                })
                .collect(),
            table: TableData {
                columns: TABLE_COLUMNS.to_vec(),
                rows,
            },
            state: dispatcher.state().clone(),
            views: dispatcher.initial_render().updates,
        }
    }
}
