//! Selection state shared by every view
//!
//! Owned by the dispatcher; renderers only ever see a shared borrow.

use crate::dataset::{CountryRecord, Iso};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The country-level index painted on the choropleth.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumIter,
)]
pub enum Metric {
    /// Multidimensional Poverty Index
    #[default]
    #[serde(rename = "MPI")]
    #[strum(serialize = "MPI")]
    Mpi,
    /// Gender Inequality Index
    #[serde(rename = "GII")]
    #[strum(serialize = "GII")]
    Gii,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown metric `{0}`: expected MPI or GII")]
pub struct UnknownMetric(pub String);

impl Metric {
    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Mpi => "Multidimensional Poverty Index (MPI)",
            Metric::Gii => "Gender Inequality Index (GII)",
        }
    }

    /// Value of this metric for one country.
    pub fn value_of(&self, record: &CountryRecord) -> Option<f64> {
        match self {
            Metric::Mpi => record.mpi,
            Metric::Gii => record.gii,
        }
    }

    /// The other metric; used by the terminal toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Metric::Mpi => Metric::Gii,
            Metric::Gii => Metric::Mpi,
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MPI" => Ok(Metric::Mpi),
            "GII" => Ok(Metric::Gii),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// Current selection and metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    selection: Option<Iso>,
    metric: Metric,
}

impl ViewState {
    pub fn new(selection: Option<Iso>, metric: Metric) -> Self {
        Self { selection, metric }
    }

    pub fn selection(&self) -> Option<&Iso> {
        self.selection.as_ref()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    // Setters are crate-private: only the dispatcher mutates state.
    pub(crate) fn select(&mut self, iso: Iso) {
        self.selection = Some(iso);
    }

    pub(crate) fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing_is_case_insensitive() {
        assert_eq!("mpi".parse::<Metric>().unwrap(), Metric::Mpi);
        assert_eq!(" GII ".parse::<Metric>().unwrap(), Metric::Gii);
        assert!("HDI".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_display_and_serde_agree() {
        for metric in [Metric::Mpi, Metric::Gii] {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric));
        }
        assert_eq!(Metric::Mpi.toggled(), Metric::Gii);
    }
}
