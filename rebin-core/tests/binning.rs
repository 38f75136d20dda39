use rebin_core::{BinConfig, Reading, RebinError, bin_readings, sort_descending};

fn r(ts: f64, value: f64) -> Reading {
    Reading::new(ts, value)
}

#[test]
fn averages_readings_per_bin_and_coerces_nan_inputs() {
    // Readings arrive unsorted; the adapter contract is descending order.
    let mut readings = vec![
        r(1000.0, 10.0),
        r(2300.0, 30.0),
        r(1700.0, f64::NAN),
        r(1300.0, 20.0),
    ];
    sort_descending(&mut readings);

    let cfg = BinConfig::new(1000, 1000).with_end_time(3000);
    let rows = bin_readings(&readings, &cfg).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].unix_time, 1000);
    // [1000, 2000) holds {10, 20, 0}: the NaN reading enters the mean as zero.
    assert!((rows[0].value - 10.0).abs() < 1e-12);
    assert_eq!(rows[1].unix_time, 2000);
    assert!((rows[1].value - 30.0).abs() < 1e-12);
}

#[test]
fn empty_window_yields_nan_rows_not_an_error() {
    // A reading exists after the window, so the pre-scan passes, but no bin
    // ever matches: every row is the "no data" marker.
    let readings = vec![r(400.0, 1.0)];
    let cfg = BinConfig::new(0, 100).with_end_time(250);
    let rows = bin_readings(&readings, &cfg).unwrap();

    let times: Vec<i64> = rows.iter().map(|row| row.unix_time).collect();
    assert_eq!(times, vec![0, 100, 200]);
    assert!(rows.iter().all(|row| row.value.is_nan()));
}

#[test]
fn all_readings_before_start_fail_fast() {
    let readings = vec![r(900.0, 5.0), r(500.0, 4.0), r(100.0, 3.0)];
    let cfg = BinConfig::new(1000, 100).with_end_time(2000);
    let err = bin_readings(&readings, &cfg).unwrap_err();
    assert!(matches!(err, RebinError::NoDataInWindow { start: 1000 }));
}

#[test]
fn empty_input_fails_fast() {
    let cfg = BinConfig::new(1000, 100).with_end_time(2000);
    let err = bin_readings(&[], &cfg).unwrap_err();
    assert!(matches!(err, RebinError::NoDataInWindow { .. }));
}

#[test]
fn all_invalid_bin_reports_zero_not_nan() {
    // A bin whose readings were all coerced zeros is distinct from a bin
    // that received nothing.
    let readings = vec![r(150.0, f64::NAN), r(120.0, f64::NAN)];
    let cfg = BinConfig::new(100, 100).with_end_time(300);
    let rows = bin_readings(&readings, &cfg).unwrap();
    assert_eq!(rows[0].value, 0.0);
    assert!(rows[1].value.is_nan());
}

#[test]
fn readings_that_predate_the_window_are_dropped() {
    let mut readings = vec![r(50.0, 999.0), r(150.0, 2.0), r(250.0, 4.0)];
    sort_descending(&mut readings);
    let cfg = BinConfig::new(100, 100).with_end_time(300);
    let rows = bin_readings(&readings, &cfg).unwrap();
    assert!((rows[0].value - 2.0).abs() < 1e-12);
    assert!((rows[1].value - 4.0).abs() < 1e-12);
}

#[test]
fn boundary_reading_belongs_to_the_later_bin() {
    // Bins are half-open: a reading exactly on an edge goes to the bin it starts.
    let mut readings = vec![r(100.0, 1.0), r(200.0, 3.0)];
    sort_descending(&mut readings);
    let cfg = BinConfig::new(100, 100).with_end_time(300);
    let rows = bin_readings(&readings, &cfg).unwrap();
    assert!((rows[0].value - 1.0).abs() < 1e-12);
    assert!((rows[1].value - 3.0).abs() < 1e-12);
}

#[test]
fn end_inside_first_interval_yields_no_rows() {
    let readings = vec![r(10.0, 1.0)];
    let cfg = BinConfig::new(0, 100).with_end_time(99);
    let rows = bin_readings(&readings, &cfg).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn readings_newer_than_the_window_are_ignored() {
    let mut readings = vec![r(150.0, 2.0), r(5000.0, 777.0)];
    sort_descending(&mut readings);
    let cfg = BinConfig::new(100, 100).with_end_time(300);
    let rows = bin_readings(&readings, &cfg).unwrap();
    assert!((rows[0].value - 2.0).abs() < 1e-12);
    assert!(rows[1].value.is_nan());
}
