use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::types::{BigDecimal, JsonValue};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::outcome::ResultRow;

/// A typed SQL value, used both for parameter binding and for decoded
/// result cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(BigDecimal),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Json(JsonValue),
}

/// A column name paired with a value. Used for insert/update/delete/select
/// parameter binding and for the pairs of a decoded result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: String,
    pub value: Value,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Value {
    /// Decode one cell of a result row by its MySQL column type.
    pub fn decode(row: &MySqlRow, idx: usize) -> Value {
        let value_ref = row.try_get_raw(idx).ok();

        if let Some(vr) = value_ref {
            if vr.is_null() {
                return Value::Null;
            }

            let type_info = vr.type_info().clone();
            let type_name = type_info.name();

            match type_name {
                "BOOLEAN" | "TINYINT(1)" => {
                    if let Ok(v) = row.try_get::<bool, _>(idx) {
                        return Value::Bool(v);
                    }
                }
                "TINYINT" => {
                    if let Ok(v) = row.try_get::<i8, _>(idx) {
                        return Value::Int(v.into());
                    }
                }
                "SMALLINT" => {
                    if let Ok(v) = row.try_get::<i16, _>(idx) {
                        return Value::Int(v.into());
                    }
                }
                "INT" | "MEDIUMINT" => {
                    if let Ok(v) = row.try_get::<i32, _>(idx) {
                        return Value::Int(v.into());
                    }
                }
                "BIGINT" => {
                    if let Ok(v) = row.try_get::<i64, _>(idx) {
                        return Value::Int(v);
                    }
                }
                "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED"
                | "INT UNSIGNED" | "BIGINT UNSIGNED" => {
                    if let Ok(v) = row.try_get::<u64, _>(idx) {
                        return Value::UInt(v);
                    }
                }
                "FLOAT" => {
                    if let Ok(v) = row.try_get::<f32, _>(idx) {
                        return Value::Float(v.into());
                    }
                }
                "DOUBLE" => {
                    if let Ok(v) = row.try_get::<f64, _>(idx) {
                        return Value::Float(v);
                    }
                }
                "DECIMAL" => {
                    if let Ok(v) = row.try_get::<BigDecimal, _>(idx) {
                        return Value::Decimal(v);
                    }
                }
                "VARCHAR" | "CHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT"
                | "ENUM" | "SET" => {
                    if let Ok(v) = row.try_get::<String, _>(idx) {
                        return Value::Text(v);
                    }
                }
                "DATE" => {
                    if let Ok(v) = row.try_get::<NaiveDate, _>(idx) {
                        return Value::Date(v);
                    }
                }
                "TIME" => {
                    if let Ok(v) = row.try_get::<NaiveTime, _>(idx) {
                        return Value::Time(v);
                    }
                }
                "DATETIME" | "TIMESTAMP" => {
                    if let Ok(v) = row.try_get::<NaiveDateTime, _>(idx) {
                        return Value::DateTime(v);
                    }
                }
                "JSON" => {
                    if let Ok(v) = row.try_get::<JsonValue, _>(idx) {
                        return Value::Json(v);
                    }
                }
                "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" => {
                    if let Ok(v) = row.try_get::<Vec<u8>, _>(idx) {
                        return Value::Bytes(v);
                    }
                }
                _ => {}
            }
        }

        row.try_get::<String, _>(idx)
            .map(Value::Text)
            .or_else(|_| row.try_get::<i64, _>(idx).map(Value::Int))
            .or_else(|_| row.try_get::<f64, _>(idx).map(Value::Float))
            .or_else(|_| row.try_get::<bool, _>(idx).map(Value::Bool))
            .or_else(|_| row.try_get::<Vec<u8>, _>(idx).map(Value::Bytes))
            .unwrap_or(Value::Null)
    }
}

/// Decode a full driver row into ordered column name/value pairs.
pub(crate) fn decode_row(row: &MySqlRow) -> ResultRow {
    let pairs = row
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| Pair {
            key: column.name().to_string(),
            value: Value::decode(row, idx),
        })
        .collect();

    ResultRow { pairs }
}

pub(crate) type MySqlQuery<'q> = Query<'q, sqlx::MySql, MySqlArguments>;

/// Bind a value as the next positional parameter of a prepared statement.
pub(crate) fn bind_value<'q>(query: MySqlQuery<'q>, value: &Value) -> MySqlQuery<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(v) => query.bind(*v),
        Value::Int(v) => query.bind(*v),
        Value::UInt(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::Decimal(v) => query.bind(v.clone()),
        Value::Text(v) => query.bind(v.clone()),
        Value::Bytes(v) => query.bind(v.clone()),
        Value::Date(v) => query.bind(*v),
        Value::Time(v) => query.bind(*v),
        Value::DateTime(v) => query.bind(*v),
        Value::Json(v) => query.bind(v.clone()),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
            Value::Date(v) => write!(f, "{}", v),
            Value::Time(v) => write!(f, "{}", v),
            Value::DateTime(v) => write!(f, "{}", v),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
