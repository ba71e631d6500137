// File: crates/curve-core/tests/dataset.rs
// Purpose: CSV loading from disk and its failure modes.

use curve_core::{Dataset, DatasetError};

#[test]
fn loads_file_with_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adaptation_data.csv");
    std::fs::write(&path, "Phase,TimeStep,Accuracy\nA,0,10\nA,1, 20.5\nB,2,33\n").unwrap();

    let ds = Dataset::load_csv(&path).expect("load");
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.points(), vec![(0.0, 10.0), (1.0, 20.5), (2.0, 33.0)]);
    assert_eq!(ds.observations()[1].accuracy, 20.5);
}

#[test]
fn nonexistent_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    match Dataset::load_csv(&path) {
        Err(DatasetError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn missing_accuracy_column() {
    let err = Dataset::from_reader("TimeStep,Score\n0,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn("Accuracy")));
    assert_eq!(err.to_string(), "missing required column 'Accuracy'");
}

#[test]
fn missing_time_step_column() {
    let err = Dataset::from_reader("Step,Accuracy\n0,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn("TimeStep")));
}

#[test]
fn column_names_are_case_sensitive() {
    let err = Dataset::from_reader("timestep,accuracy\n0,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn(_)));
}

#[test]
fn empty_file_is_missing_columns() {
    let err = Dataset::from_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn("TimeStep")));
}

#[test]
fn ragged_row_is_csv_error() {
    let err = Dataset::from_reader("TimeStep,Accuracy\n0,1\n1,2,3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::Csv(_)));
}
