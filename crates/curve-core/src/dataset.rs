// File: crates/curve-core/src/dataset.rs
// Summary: Loads (TimeStep, Accuracy) observations from a headered CSV file, keeping file order.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Header of the time-step column.
pub const TIME_STEP_COLUMN: &str = "TimeStep";
/// Header of the accuracy column.
pub const ACCURACY_COLUMN: &str = "Accuracy";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidValue {
        /// 1-based data row (the header is not counted).
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// One row of the input file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub time_step: f64,
    pub accuracy: f64,
}

/// Ordered, read-only set of observations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let rdr = reader_builder()
            .from_path(path)
            .map_err(|source| DatasetError::Open { path: path.to_path_buf(), source })?;
        let ds = Self::from_csv_reader(rdr)?;
        log::info!("loaded {} observations from {}", ds.len(), path.display());
        Ok(ds)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_csv_reader(reader_builder().from_reader(reader))
    }

    fn from_csv_reader<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = rdr.headers()?.clone();
        log::debug!("headers: {:?}", headers.iter().collect::<Vec<_>>());

        let idx = |name: &'static str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let i_time = idx(TIME_STEP_COLUMN)?;
        let i_acc = idx(ACCURACY_COLUMN)?;

        let mut observations = Vec::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = n + 1;
            let field = |i: usize, column: &'static str| -> Result<f64, DatasetError> {
                let raw = rec.get(i).unwrap_or("");
                // empty cell is a missing value; it becomes a gap in the line
                if raw.is_empty() {
                    return Ok(f64::NAN);
                }
                raw.parse::<f64>().map_err(|_| DatasetError::InvalidValue {
                    row,
                    column,
                    value: raw.to_string(),
                })
            };
            observations.push(Observation {
                time_step: field(i_time, TIME_STEP_COLUMN)?,
                accuracy: field(i_acc, ACCURACY_COLUMN)?,
            });
        }
        Ok(Self { observations })
    }

    pub fn observations(&self) -> &[Observation] { &self.observations }

    pub fn len(&self) -> usize { self.observations.len() }

    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    /// (time_step, accuracy) pairs in file order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.observations.iter().map(|o| (o.time_step, o.accuracy)).collect()
    }

    /// Largest finite time step, if any.
    pub fn max_time_step(&self) -> Option<f64> {
        self.observations
            .iter()
            .map(|o| o.time_step)
            .filter(|t| t.is_finite())
            .reduce(f64::max)
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).trim(csv::Trim::All);
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_file_order() {
        let csv = "TimeStep,Accuracy\n4,70\n0,10\n2,40.5\n";
        let ds = Dataset::from_reader(csv.as_bytes()).expect("parse");
        assert_eq!(ds.points(), vec![(4.0, 70.0), (0.0, 10.0), (2.0, 40.5)]);
        assert_eq!(ds.max_time_step(), Some(4.0));
    }

    #[test]
    fn reports_bad_value_with_row() {
        let csv = "TimeStep,Accuracy\n0,10\n1,abc\n";
        match Dataset::from_reader(csv.as_bytes()) {
            Err(DatasetError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, ACCURACY_COLUMN);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_cell_is_missing_value() {
        let csv = "TimeStep,Accuracy\n0,10\n1,\n2, \n3,40\n";
        let ds = Dataset::from_reader(csv.as_bytes()).expect("parse");
        assert_eq!(ds.len(), 4);
        assert!(ds.observations()[1].accuracy.is_nan());
        assert!(ds.observations()[2].accuracy.is_nan());
        assert_eq!(ds.observations()[3].accuracy, 40.0);
    }

    #[test]
    fn header_only_is_empty() {
        let ds = Dataset::from_reader("TimeStep,Accuracy\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.max_time_step(), None);
    }
}
