use chrono::NaiveDate;
use easy_mysql::{Pair, Value};

#[test]
fn conversions_pick_the_matching_variant() {
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7u16), Value::UInt(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("ada"), Value::Text("ada".to_string()));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(vec![0xde, 0xad]), Value::Bytes(vec![0xde, 0xad]));
}

#[test]
fn option_none_maps_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
}

#[test]
fn display_matches_client_rendering() {
    assert_eq!(Value::Null.to_string(), "NULL");
    assert_eq!(Value::Bytes(vec![0xab, 0xcd]).to_string(), "0xabcd");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Bool(false).to_string(), "false");
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    assert_eq!(Value::from(date).to_string(), "2026-08-06");
}

#[test]
fn pairs_compare_by_key_and_value() {
    assert_eq!(Pair::new("age", 36), Pair::new("age", 36i64));
    assert_ne!(Pair::new("age", 36), Pair::new("age", 37));
    assert_ne!(Pair::new("age", 36), Pair::new("years", 36));
}
