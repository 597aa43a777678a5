use std::str::FromStr;
use std::time::Instant;

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tracing::{debug, warn};

use crate::error::Error;
use crate::outcome::{ConnectionOutcome, QueryOutcome, ResultTable, StatementOutcome};
use crate::schema::Column;
use crate::statement;
use crate::value::{Pair, bind_value, decode_row};

/// Port used when the connection URL is derived from a host name.
pub const DEFAULT_PORT: u16 = 3306;

/// A MySQL convenience wrapper holding one lazily-created connection pool.
///
/// Every operation obtains a connection on demand (reusing an open pool,
/// replacing a closed one), executes a single statement, and reports the
/// result through an outcome struct instead of an `Err`.
pub struct MySql {
    url: String,
    user: String,
    password: String,
    pool: Option<MySqlPool>,
}

impl MySql {
    /// Wrapper over a full connection URL (`mysql://host:port/db`), with
    /// credentials supplied separately.
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            pool: None,
        }
    }

    /// Derive the standard connection URL from a host and database name,
    /// using [`DEFAULT_PORT`].
    pub fn with_host(
        host: &str,
        database: &str,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(
            format!("mysql://{}:{}/{}", host, DEFAULT_PORT, database),
            user,
            password,
        )
    }

    /// Connect to the database. An already-open pool is reused and reported
    /// with the `elapsed: None` sentinel; a closed pool is replaced.
    pub async fn connect(&mut self) -> ConnectionOutcome {
        let start = Instant::now();

        if let Some(pool) = &self.pool {
            if !pool.is_closed() {
                return ConnectionOutcome {
                    connected: true,
                    elapsed: None,
                    errors: Vec::new(),
                    pool: Some(pool.clone()),
                };
            }
        }

        match self.open_pool().await {
            Ok(pool) => {
                self.pool = Some(pool.clone());
                ConnectionOutcome {
                    connected: true,
                    elapsed: Some(start.elapsed()),
                    errors: Vec::new(),
                    pool: Some(pool),
                }
            }
            Err(err) => {
                warn!(error = %err, "connection failed");
                ConnectionOutcome {
                    connected: false,
                    elapsed: Some(start.elapsed()),
                    errors: vec![err.to_string()],
                    pool: None,
                }
            }
        }
    }

    async fn open_pool(&self) -> Result<MySqlPool, Error> {
        let options = MySqlConnectOptions::from_str(&self.url)?
            .username(&self.user)
            .password(&self.password);
        let pool = MySqlPoolOptions::new().connect_with(options).await?;
        Ok(pool)
    }

    /// Disconnect from the database. Failures are not reported.
    pub async fn disconnect(&self) {
        if let Some(pool) = &self.pool {
            if !pool.is_closed() {
                pool.close().await;
            }
        }
    }

    pub async fn create_database(&mut self, name: &str) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::create_database(name), &[])
            .await
    }

    pub async fn drop_database(&mut self, name: &str) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::drop_database(name), &[])
            .await
    }

    /// Back up a database to a `.bak` file on the server's disk.
    pub async fn backup_database(&mut self, database: &str, bak: &str) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::backup_database(database, bak), &[])
            .await
    }

    pub async fn create_table(
        &mut self,
        if_not_exists: bool,
        name: &str,
        columns: &[Column],
    ) -> StatementOutcome {
        let start = Instant::now();
        self.execute(
            start,
            statement::create_table(if_not_exists, name, columns),
            &[],
        )
        .await
    }

    pub async fn drop_table(&mut self, name: &str) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::drop_table(name), &[]).await
    }

    /// Insert one row built from key-value pairs.
    pub async fn insert(&mut self, table: &str, pairs: &[Pair]) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::insert(table, pairs), pairs)
            .await
    }

    /// Update rows matching `filter`, setting the `set` pairs. Set values
    /// are bound before filter values.
    pub async fn update(&mut self, table: &str, set: &[Pair], filter: &[Pair]) -> StatementOutcome {
        let start = Instant::now();
        let sql = statement::update(table, set, filter);
        let params: Vec<Pair> = set.iter().chain(filter).cloned().collect();
        self.execute(start, sql, &params).await
    }

    /// Delete rows matching `filter`; an empty filter deletes every row.
    pub async fn delete(&mut self, table: &str, filter: &[Pair]) -> StatementOutcome {
        let start = Instant::now();
        self.execute(start, statement::delete(table, filter), filter)
            .await
    }

    /// Select `columns` (all when empty) from rows matching `filter`,
    /// materializing every result row before returning.
    pub async fn select<S: AsRef<str>>(
        &mut self,
        columns: &[S],
        table: &str,
        filter: &[Pair],
    ) -> QueryOutcome {
        let start = Instant::now();
        let sql = statement::select(columns, table, filter);

        let connection = self.connect().await;
        let Some(pool) = connection.pool else {
            return QueryOutcome {
                success: false,
                elapsed: start.elapsed(),
                table: ResultTable::default(),
                errors: not_connected(connection.errors),
                sql,
                pool: None,
            };
        };

        debug!(sql = %sql, "executing query");
        let mut query = sqlx::query(&sql);
        for pair in filter {
            query = bind_value(query, &pair.value);
        }

        match query.fetch_all(&pool).await {
            Ok(rows) => QueryOutcome {
                success: true,
                elapsed: start.elapsed(),
                table: ResultTable {
                    rows: rows.iter().map(decode_row).collect(),
                },
                errors: Vec::new(),
                sql,
                pool: Some(pool),
            },
            Err(err) => {
                warn!(error = %err, sql = %sql, "query failed");
                QueryOutcome {
                    success: false,
                    elapsed: start.elapsed(),
                    table: ResultTable::default(),
                    errors: vec![err.to_string()],
                    sql,
                    pool: Some(pool),
                }
            }
        }
    }

    async fn execute(&mut self, start: Instant, sql: String, params: &[Pair]) -> StatementOutcome {
        let connection = self.connect().await;
        let Some(pool) = connection.pool else {
            return StatementOutcome {
                success: false,
                elapsed: start.elapsed(),
                errors: not_connected(connection.errors),
                sql,
                pool: None,
            };
        };

        debug!(sql = %sql, "executing statement");
        let mut query = sqlx::query(&sql);
        for pair in params {
            query = bind_value(query, &pair.value);
        }

        match query.execute(&pool).await {
            Ok(_) => StatementOutcome {
                success: true,
                elapsed: start.elapsed(),
                errors: Vec::new(),
                sql,
                pool: Some(pool),
            },
            Err(err) => {
                warn!(error = %err, sql = %sql, "statement failed");
                StatementOutcome {
                    success: false,
                    elapsed: start.elapsed(),
                    errors: vec![err.to_string()],
                    sql,
                    pool: Some(pool),
                }
            }
        }
    }
}

/// Append the `not connected` marker after any connection-level errors.
fn not_connected(mut errors: Vec<String>) -> Vec<String> {
    errors.push(Error::NotConnected.to_string());
    errors
}
