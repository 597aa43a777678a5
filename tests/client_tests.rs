//! Offline failure-path tests: the URL below never parses as a MySQL
//! connection string, so no network access is attempted.

use easy_mysql::{MySql, Pair};

const BAD_URL: &str = "not-a-mysql-url";

#[tokio::test]
async fn connect_with_invalid_url_reports_failure() {
    let mut db = MySql::new(BAD_URL, "root", "secret");
    let outcome = db.connect().await;

    assert!(!outcome.connected);
    assert!(outcome.elapsed.is_some(), "elapsed is measured on failure");
    assert!(!outcome.errors.is_empty());
    assert!(outcome.pool.is_none());
}

#[tokio::test]
async fn statement_on_unconnectable_wrapper_ends_with_not_connected() {
    let mut db = MySql::new(BAD_URL, "root", "secret");
    let outcome = db.insert("users", &[Pair::new("name", "ada")]).await;

    assert!(!outcome.success);
    assert_eq!(outcome.sql, "INSERT INTO users (name) VALUES (?);");
    assert_eq!(
        outcome.errors.last().map(String::as_str),
        Some("not connected")
    );
    assert!(
        outcome.errors.len() >= 2,
        "the connection error precedes the marker: {:?}",
        outcome.errors
    );
}

#[tokio::test]
async fn query_on_unconnectable_wrapper_returns_empty_table() {
    let mut db = MySql::new(BAD_URL, "root", "secret");
    let outcome = db.select::<&str>(&[], "users", &[]).await;

    assert!(!outcome.success);
    assert!(outcome.table.is_empty());
    assert_eq!(outcome.sql, "SELECT * FROM users WHERE 1;");
    assert_eq!(
        outcome.errors.last().map(String::as_str),
        Some("not connected")
    );
}

#[tokio::test]
async fn every_builder_reports_through_outcomes_not_panics() {
    let mut db = MySql::new(BAD_URL, "root", "secret");

    assert!(!db.create_database("shop").await.success);
    assert!(!db.drop_database("shop").await.success);
    assert!(!db.backup_database("shop", "/backups/shop.bak").await.success);
    assert!(!db.drop_table("users").await.success);
    assert!(!db.delete("users", &[]).await.success);
    assert!(
        !db.update("users", &[Pair::new("name", "grace")], &[])
            .await
            .success
    );
}

#[tokio::test]
async fn disconnect_without_connection_is_a_no_op() {
    let db = MySql::new(BAD_URL, "root", "secret");
    db.disconnect().await;
}
