// tests/load_test.rs

use control_plot::{load, Delimiter, PlotError, SampleTable};
use std::fs;
use std::path::PathBuf;

/// writes `content` to a file unique to this test process
fn write_log(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "control_plot_{}_{}.csv",
        std::process::id(),
        name
    ));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn columns_stay_aligned_with_records() {
    let rows: Vec<[f64; 6]> = (0..50)
        .map(|i| {
            let t = i as f64 * 0.01;
            [t, 1.0, 0.25 * i as f64, -0.5 * i as f64, -5.0, 5.0]
        })
        .collect();
    let content: String = rows
        .iter()
        .map(|r| {
            let fields: Vec<String> = r.iter().map(|v| v.to_string()).collect();
            fields.join(",") + "\n"
        })
        .collect();
    let path = write_log("aligned", &content);
    let table = load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(table.len(), rows.len());
    for column in [
        &table.time,
        &table.setpoint,
        &table.output,
        &table.control_input,
        &table.input_lower_limit,
        &table.input_upper_limit,
    ]
    .iter()
    {
        assert_eq!(column.len(), rows.len());
    }
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(table.row(i), Some(*row));
    }
}

#[test]
fn records_keep_file_order() {
    let forward = "0,1,0,0,-5,5\n1,1,0.5,2,-5,5\n2,1,1,2,-5,5\n";
    let reversed = "2,1,1,2,-5,5\n1,1,0.5,2,-5,5\n0,1,0,0,-5,5\n";
    let a = SampleTable::from_reader(forward.as_bytes(), Delimiter::Comma).unwrap();
    let b = SampleTable::from_reader(reversed.as_bytes(), Delimiter::Comma).unwrap();
    assert_eq!(a.time, vec![0., 1., 2.]);
    assert_eq!(b.time, vec![2., 1., 0.]);
    assert_eq!(b.output, vec![1., 0.5, 0.]);
    assert!(a.is_time_ordered());
    assert!(!b.is_time_ordered());
}

#[test]
fn duplicate_records_are_kept() {
    let content = "0,1,0,0,-5,5\n0,1,0,0,-5,5\n";
    let table = SampleTable::from_reader(content.as_bytes(), Delimiter::Comma).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("control_plot_this_file_does_not_exist.csv");
    match load(&path) {
        Err(PlotError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn short_record_aborts_the_load() {
    let path = write_log("short", "0,1,0,0,-5,5\n1,1,0.5,2,-5,5\n2,1,1,2\n3,1,1,2,-5,5\n");
    let res = load(&path);
    fs::remove_file(&path).unwrap();
    match res {
        Err(PlotError::MalformedRecord { record, found }) => {
            assert_eq!(record, 2);
            assert_eq!(found, 4);
        }
        other => panic!("expected a malformed record, got {:?}", other),
    }
}

#[test]
fn non_numeric_token_reports_record_and_field() {
    let path = write_log("nan_token", "0,1,0,0,-5,5\n1,1,abc,2,-5,5\n");
    let res = load(&path);
    fs::remove_file(&path).unwrap();
    match res {
        Err(PlotError::Parse {
            record,
            field,
            token,
        }) => {
            assert_eq!((record, field), (1, 2));
            assert_eq!(token, "abc");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn header_row_is_data_and_fails() {
    let content = "time,r,y,u,lo,hi\n0,1,0,0,-5,5\n";
    let err = SampleTable::from_reader(content.as_bytes(), Delimiter::Comma).unwrap_err();
    assert!(matches!(err, PlotError::Parse { record: 0, field: 0, .. }));
}

#[test]
fn empty_file_loads_as_empty_table() {
    let path = write_log("empty", "");
    let table = load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(table.is_empty());
}

#[test]
fn error_messages_name_the_failing_record() {
    let err = SampleTable::from_reader("0,1,x,0,-5,5\n".as_bytes(), Delimiter::Comma).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 0, field 2: could not parse \"x\" as a number"
    );
    let err = SampleTable::from_reader("0,1\n".as_bytes(), Delimiter::Comma).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 0 has 2 fields, at least 6 are required"
    );
}
