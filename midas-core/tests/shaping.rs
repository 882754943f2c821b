use midas_core::{
    Column, FieldMap, FieldValue, MidasError, Point, RangeFilter, Row, array_to_identity_map,
    extract_field, extract_time_series_points, is_any_empty, is_in_array, label_concat,
    merge_parallel, merge_points, object_keys_excluding_date, object_to_name_value_list,
    range_array, remove_first_occurrence, rows_to_columns, slice_fields,
};
use proptest::prelude::*;

fn row(date: i32, close: f64, volume: Option<f64>) -> Row {
    let mut r = Row::new();
    r.insert("date".into(), FieldValue::from(date));
    r.insert("close".into(), FieldValue::from(close));
    r.insert("volume".into(), FieldValue::from(volume));
    r
}

fn sample_rows() -> Vec<Row> {
    vec![
        row(20_160_104, 3_300.5, Some(1_200.0)),
        row(20_160_105, 3_310.0, None),
        row(20_160_106, 0.0, Some(900.0)),
        row(20_160_107, 3_290.25, Some(1_500.0)),
    ]
}

fn field_map(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn rows_to_columns_of_nothing_is_empty() {
    let table = rows_to_columns(&[], &field_map(&[("price", "close")]));
    assert!(table.is_empty());
}

#[test]
fn rows_to_columns_preserves_row_order() {
    let rows = sample_rows();
    let table = rows_to_columns(&rows, &field_map(&[("price", "close"), ("day", "date")]));

    assert_eq!(table.len(), 2);
    let price = table.series("price").unwrap();
    assert_eq!(price.len(), rows.len());
    assert_eq!(price[0], FieldValue::from(3_300.5));
    assert_eq!(price[3], FieldValue::from(3_290.25));
    assert_eq!(table.series("day").unwrap()[1], FieldValue::from(20_160_105));
}

#[test]
fn rows_to_columns_fills_missing_keys_with_null() {
    let rows = sample_rows();
    let table = rows_to_columns(&rows, &field_map(&[("oi", "open_interest")]));
    let oi = table.series("oi").unwrap();
    assert_eq!(oi.len(), 4);
    assert!(oi.iter().all(FieldValue::is_null));
}

proptest! {
    #[test]
    fn rows_to_columns_lengths_match(n in 0usize..50, keys in proptest::collection::btree_set("[a-d]", 1..4)) {
        let rows: Vec<Row> = (0..n).map(|i| {
            let mut r = Row::new();
            r.insert("a".into(), FieldValue::from(i as f64));
            r
        }).collect();
        let map: FieldMap = keys.iter().map(|k| (format!("out_{k}"), k.clone())).collect();
        let table = rows_to_columns(&rows, &map);
        if n == 0 {
            prop_assert!(table.is_empty());
        } else {
            prop_assert_eq!(table.len(), map.len());
            for (_, column) in table.iter() {
                prop_assert_eq!(column.len(), Some(n));
            }
        }
    }
}

#[test]
fn slice_fields_slices_series_and_keeps_scalars() {
    let rows = sample_rows();
    let mut table = rows_to_columns(&rows, &field_map(&[("price", "close")]));
    table.insert("symbol", Column::Scalar(FieldValue::from("IF1601")));

    let sliced = slice_fields(&table, 1, 3);
    assert_eq!(
        sliced.series("price").unwrap(),
        &[FieldValue::from(3_310.0), FieldValue::from(0.0)]
    );
    assert_eq!(
        sliced.get("symbol"),
        Some(&Column::Scalar(FieldValue::from("IF1601")))
    );

    let clamped = slice_fields(&table, 2, 100);
    assert_eq!(clamped.series("price").unwrap().len(), 2);
    let inverted = slice_fields(&table, 3, 1);
    assert!(inverted.series("price").unwrap().is_empty());
}

#[test]
fn extract_field_projects_in_order() {
    let rows = sample_rows();
    let volumes = extract_field(&rows, "volume");
    assert_eq!(
        volumes,
        vec![
            FieldValue::from(1_200.0),
            FieldValue::Null,
            FieldValue::from(900.0),
            FieldValue::from(1_500.0),
        ]
    );
    assert!(extract_field(&rows, "nope").iter().all(FieldValue::is_null));
}

#[test]
fn time_series_points_skip_falsy_values() {
    let rows = sample_rows();
    let series = extract_time_series_points(&rows, "date", "close", None);
    assert_eq!(series.label, "close");
    // the zero close on the 6th is dropped
    let xs: Vec<_> = series.data.iter().map(|[x, _]| x.clone()).collect();
    assert_eq!(
        xs,
        vec![
            FieldValue::from(20_160_104),
            FieldValue::from(20_160_105),
            FieldValue::from(20_160_107),
        ]
    );
}

#[test]
fn time_series_points_respect_range_in_either_order() {
    let rows = sample_rows();
    let forward = RangeFilter::new("date", 20_160_105.0, 20_160_107.0);
    let backward = RangeFilter::new("date", 20_160_107.0, 20_160_105.0);

    let a = extract_time_series_points(&rows, "date", "volume", Some(&forward));
    let b = extract_time_series_points(&rows, "date", "volume", Some(&backward));
    assert_eq!(a, b);
    // 5th has no volume, 6th is in range, 7th is the inclusive upper bound
    assert_eq!(a.data.len(), 2);
    assert_eq!(a.data[0][1], FieldValue::from(900.0));
    assert_eq!(a.data[1][0], FieldValue::from(20_160_107));
}

#[test]
fn time_series_points_drop_rows_without_filter_field() {
    let mut rows = sample_rows();
    rows[0].remove("date");
    let filter = RangeFilter::new("date", 0.0, 99_999_999.0);
    let out = extract_time_series_points(&rows, "close", "volume", Some(&filter));
    // row 0 lost its date, row 1 has no volume, row 2 has a zero close
    assert_eq!(out.data.len(), 1);
    assert_eq!(out.data[0][0], FieldValue::from(3_290.25));
}

#[test]
fn merge_parallel_pairs_by_index() {
    let pairs = merge_parallel(&[1, 2, 3], &["a", "b", "c", "d"]).unwrap();
    assert_eq!(pairs, vec![(1, "a"), (2, "b"), (3, "c")]);

    let err = merge_parallel(&[1, 2, 3], &["a"]).unwrap_err();
    assert!(matches!(err, MidasError::InvalidArg(_)));
}

#[test]
fn merge_points_builds_xy_records() {
    let pts = merge_points(&[20_160_104, 20_160_105], &[1.5, 2.5]).unwrap();
    assert_eq!(
        pts,
        vec![
            Point { x: 20_160_104, y: 1.5 },
            Point { x: 20_160_105, y: 2.5 },
        ]
    );
    assert!(merge_points(&[1, 2], &[0.5]).is_err());
}

#[test]
fn remove_first_occurrence_mutates_in_place() {
    let mut values = vec![1, 2, 3, 2];
    let ptr = values.as_ptr();
    let returned = remove_first_occurrence(&mut values, &2);
    assert_eq!(*returned, vec![1, 3, 2]);
    assert_eq!(returned.as_ptr(), ptr);
    assert_eq!(values, vec![1, 3, 2]);

    remove_first_occurrence(&mut values, &9);
    assert_eq!(values, vec![1, 3, 2]);
}

#[test]
fn collection_helpers() {
    assert!(is_in_array(&["IF", "IC", "IH"], &"IC"));
    assert!(!is_in_array(&[1, 2, 3], &4));

    let map = array_to_identity_map(&["close", "open"]);
    assert_eq!(map.get("close").map(String::as_str), Some("close"));
    assert_eq!(map.len(), 2);

    assert_eq!(range_array(4), vec![0, 1, 2, 3]);
    assert!(range_array(0).is_empty());

    assert_eq!(
        label_concat(&["IF1601", "IF1602"], "spread", false),
        vec!["IF1601 spread", "IF1602 spread"]
    );
}

#[test]
fn record_key_helpers() {
    let r = row(20_160_104, 1.0, None);
    assert_eq!(object_keys_excluding_date(&r), vec!["close", "volume"]);

    let mut meta = Row::new();
    meta.insert("$$hashKey".into(), FieldValue::from("x1"));
    meta.insert("toJSON".into(), FieldValue::Null);
    meta.insert("exchange".into(), FieldValue::from("CFFEX"));
    meta.insert("multiplier".into(), FieldValue::from(300));
    let list = object_to_name_value_list(&meta);
    let names: Vec<_> = list.iter().map(|nv| nv.name.as_str()).collect();
    assert_eq!(names, vec!["exchange", "multiplier"]);
    assert_eq!(list[1].value, FieldValue::from(300));
}

#[test]
fn any_empty_checks_every_argument() {
    let symbol = "IF1601";
    let no_prices: Vec<f64> = Vec::new();
    let missing: Option<&str> = None;

    assert!(!is_any_empty!(symbol, 3.5_f64, vec![1]));
    assert!(is_any_empty!(symbol, no_prices));
    assert!(is_any_empty!(missing));
    assert!(is_any_empty!(Some(String::new())));
    assert!(is_any_empty!(FieldValue::Null, symbol));
    assert!(!is_any_empty!(FieldValue::from(0.0)));
}
