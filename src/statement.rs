//! Pure SQL-text builders. Each function produces the exact statement text
//! its operation executes; dynamic values are always `?` placeholders bound
//! positionally by the caller.

use crate::schema::Column;
use crate::value::Pair;

pub fn create_database(name: &str) -> String {
    format!("CREATE DATABASE {}", name)
}

pub fn drop_database(name: &str) -> String {
    format!("DROP DATABASE {}", name)
}

pub fn backup_database(database: &str, bak: &str) -> String {
    format!("BACKUP DATABASE {} TO DISK = '{}'", database, bak)
}

/// `CREATE TABLE [IF NOT EXISTS ]name(col type [constraints…],…[, PRIMARY KEY (col)]);`
///
/// At most one `PRIMARY KEY` clause is emitted; when several columns are
/// marked primary, the last one wins.
pub fn create_table(if_not_exists: bool, name: &str, columns: &[Column]) -> String {
    let mut sql = String::from("CREATE TABLE ");
    if if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    sql.push_str(name);
    sql.push('(');

    let mut primary = None;
    for (i, column) in columns.iter().enumerate() {
        if column.primary {
            primary = Some(column.name.as_str());
        }
        if i > 0 {
            sql.push(',');
        }
        sql.push_str(&column.name);
        sql.push(' ');
        sql.push_str(&column.data_type.to_string());
        for constraint in &column.constraints {
            sql.push(' ');
            sql.push_str(&constraint.to_string());
        }
    }

    if let Some(primary) = primary {
        sql.push_str(", PRIMARY KEY (");
        sql.push_str(primary);
        sql.push(')');
    }

    sql.push_str(");");
    sql
}

pub fn drop_table(name: &str) -> String {
    format!("DROP TABLE {}", name)
}

/// `INSERT INTO table (k1,k2,…) VALUES (?,?,…);` with one placeholder per
/// pair, in key order.
pub fn insert(table: &str, pairs: &[Pair]) -> String {
    let keys: Vec<&str> = pairs.iter().map(|p| p.key.as_str()).collect();
    let placeholders = vec!["?"; pairs.len()].join(",");
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        keys.join(","),
        placeholders
    )
}

/// ``UPDATE table SET `k`=?,… [WHERE `k`=? AND …]`` binding set values before
/// filter values.
pub fn update(table: &str, set: &[Pair], filter: &[Pair]) -> String {
    let assignments: Vec<String> = set.iter().map(|p| format!("`{}`=?", p.key)).collect();
    let mut sql = format!("UPDATE {} SET {}", table, assignments.join(","));

    if !filter.is_empty() {
        let conditions: Vec<String> = filter.iter().map(|p| format!("`{}`=?", p.key)).collect();
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql
}

/// `DELETE FROM table WHERE k=? AND …`, or `WHERE 1` when no conditions are
/// given.
pub fn delete(table: &str, filter: &[Pair]) -> String {
    let mut sql = format!("DELETE FROM {} WHERE ", table);
    if filter.is_empty() {
        sql.push('1');
    } else {
        let conditions: Vec<String> = filter.iter().map(|p| format!("{}=?", p.key)).collect();
        sql.push_str(&conditions.join(" AND "));
    }
    sql
}

/// `SELECT c1,c2,… FROM table WHERE k=? AND …;` with `*` when the column
/// list is empty and `1` when the filter is empty.
pub fn select<S: AsRef<str>>(columns: &[S], table: &str, filter: &[Pair]) -> String {
    let mut sql = String::from("SELECT ");
    if columns.is_empty() {
        sql.push('*');
    } else {
        let names: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
        sql.push_str(&names.join(","));
    }

    sql.push_str(" FROM ");
    sql.push_str(table);
    sql.push_str(" WHERE ");
    if filter.is_empty() {
        sql.push('1');
    } else {
        let conditions: Vec<String> = filter.iter().map(|p| format!("{}=?", p.key)).collect();
        sql.push_str(&conditions.join(" AND "));
    }

    sql.push(';');
    sql
}

/// `MIN(column) AS column`, usable in a select column list.
pub fn min(column: &str) -> String {
    format!("MIN({}) AS {}", column, column)
}

/// `MAX(column) AS column`, usable in a select column list.
pub fn max(column: &str) -> String {
    format!("MAX({}) AS {}", column, column)
}
