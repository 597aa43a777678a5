use std::time::Duration;

use sqlx::MySqlPool;

use crate::value::{Pair, Value};

/// Returned by [`crate::MySql::connect`].
#[derive(Debug, Clone)]
pub struct ConnectionOutcome {
    pub connected: bool,
    /// Wall-clock time spent connecting. `None` when an already-open
    /// connection was reused.
    pub elapsed: Option<Duration>,
    /// Empty exactly when `connected` is true.
    pub errors: Vec<String>,
    pub pool: Option<MySqlPool>,
}

/// Returned by every non-query operation.
#[derive(Debug, Clone)]
pub struct StatementOutcome {
    pub success: bool,
    pub elapsed: Duration,
    /// Empty exactly when `success` is true.
    pub errors: Vec<String>,
    /// The statement text that was executed (or would have been).
    pub sql: String,
    pub(crate) pool: Option<MySqlPool>,
}

impl StatementOutcome {
    /// Close the connection the statement ran on.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

/// Returned by [`crate::MySql::select`].
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub success: bool,
    pub elapsed: Duration,
    /// Populated only when the query succeeded.
    pub table: ResultTable,
    /// Empty exactly when `success` is true.
    pub errors: Vec<String>,
    /// The statement text that was executed (or would have been).
    pub sql: String,
    pub(crate) pool: Option<MySqlPool>,
}

impl QueryOutcome {
    /// Close the connection the query ran on.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

/// All rows returned by a query, in result order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// One result row: column name/value pairs in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    pub pairs: Vec<Pair>,
}

impl ResultRow {
    /// Value of the named column, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.iter().find(|p| p.key == key).map(|p| &p.value)
    }
}
