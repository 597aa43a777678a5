//! A small convenience layer over the `sqlx` MySQL driver: build SQL
//! statements from structured inputs (column descriptors, key-value pairs)
//! and execute them through a pooled connection, wrapping every result in a
//! typed outcome struct instead of an `Err`.

mod client;
mod error;
mod outcome;
mod schema;
pub mod statement;
mod value;

pub use client::{DEFAULT_PORT, MySql};
pub use error::Error;
pub use outcome::{ConnectionOutcome, QueryOutcome, ResultRow, ResultTable, StatementOutcome};
pub use schema::{Column, ColumnType, Constraint, DataType};
pub use statement::{max, min};
pub use value::{Pair, Value};
