use rebin_core::{BinnedRow, RebinError, join_aligned};

fn series(times: &[i64], values: &[f64]) -> Vec<BinnedRow> {
    times
        .iter()
        .zip(values)
        .map(|(&t, &v)| BinnedRow::new(t, v))
        .collect()
}

#[test]
fn joins_aligned_series_in_input_order() {
    let table = join_aligned(vec![
        ("co2".into(), series(&[0, 100, 200], &[400.0, f64::NAN, 410.0])),
        ("radiation".into(), series(&[0, 100, 200], &[1.5, 2.5, 3.5])),
    ])
    .unwrap();

    assert_eq!(table.unix_time, vec![0, 100, 200]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].name, "co2");
    assert!(table.columns[0].values[1].is_nan());
    assert_eq!(table.columns[1].values, vec![1.5, 2.5, 3.5]);
}

#[test]
fn empty_input_joins_to_an_empty_table() {
    let table = join_aligned(vec![]).unwrap();
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
}

#[test]
fn length_mismatch_is_a_data_error() {
    let err = join_aligned(vec![
        ("a".into(), series(&[0, 100], &[1.0, 2.0])),
        ("b".into(), series(&[0], &[1.0])),
    ])
    .unwrap_err();
    assert!(matches!(err, RebinError::Data(_)));
}

#[test]
fn timestamp_mismatch_is_a_data_error() {
    let err = join_aligned(vec![
        ("a".into(), series(&[0, 100], &[1.0, 2.0])),
        ("b".into(), series(&[0, 150], &[1.0, 2.0])),
    ])
    .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("misaligned"), "{msg}");
}
