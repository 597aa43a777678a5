//! Round-trip tests against a live MySQL server. Ignored by default; set
//! `EASY_MYSQL_TEST_URL` (and optionally `EASY_MYSQL_TEST_USER` /
//! `EASY_MYSQL_TEST_PASSWORD`) and run with `--ignored`.

use easy_mysql::{Column, ColumnType, Constraint, DataType, MySql, Pair, Value, min};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn test_db() -> Option<MySql> {
    let url = std::env::var("EASY_MYSQL_TEST_URL").ok()?;
    let user = std::env::var("EASY_MYSQL_TEST_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("EASY_MYSQL_TEST_PASSWORD").unwrap_or_default();
    Some(MySql::new(url, user, password))
}

#[tokio::test]
#[ignore = "requires a running MySQL server (set EASY_MYSQL_TEST_URL)"]
async fn insert_then_select_round_trips() {
    init_tracing();
    let Some(mut db) = test_db() else { return };

    db.drop_table("easy_mysql_people").await;
    let created = db
        .create_table(
            true,
            "easy_mysql_people",
            &[
                Column::new("id", DataType::new(ColumnType::Int))
                    .constraint(Constraint::NotNull)
                    .primary(),
                Column::new("name", DataType::with_length(ColumnType::VarChar, 64)),
            ],
        )
        .await;
    assert!(created.success, "create table failed: {:?}", created.errors);

    let pairs = [Pair::new("id", 1), Pair::new("name", "ada")];
    let inserted = db.insert("easy_mysql_people", &pairs).await;
    assert!(inserted.success, "insert failed: {:?}", inserted.errors);

    let selected = db
        .select::<&str>(&[], "easy_mysql_people", &[Pair::new("id", 1)])
        .await;
    assert!(selected.success, "select failed: {:?}", selected.errors);
    assert_eq!(selected.table.len(), 1);

    let row = &selected.table.rows[0];
    assert_eq!(row.get("id"), Some(&Value::Int(1)));
    assert_eq!(row.get("name"), Some(&Value::Text("ada".to_string())));

    db.drop_table("easy_mysql_people").await;
    db.disconnect().await;
}

#[tokio::test]
#[ignore = "requires a running MySQL server (set EASY_MYSQL_TEST_URL)"]
async fn update_and_delete_affect_matching_rows() {
    init_tracing();
    let Some(mut db) = test_db() else { return };

    db.drop_table("easy_mysql_scores").await;
    let created = db
        .create_table(
            true,
            "easy_mysql_scores",
            &[
                Column::new("id", DataType::new(ColumnType::Int)).primary(),
                Column::new("score", DataType::new(ColumnType::Int)),
            ],
        )
        .await;
    assert!(created.success, "create table failed: {:?}", created.errors);

    for (id, score) in [(1, 10), (2, 20)] {
        let inserted = db
            .insert(
                "easy_mysql_scores",
                &[Pair::new("id", id), Pair::new("score", score)],
            )
            .await;
        assert!(inserted.success, "insert failed: {:?}", inserted.errors);
    }

    let updated = db
        .update(
            "easy_mysql_scores",
            &[Pair::new("score", 99)],
            &[Pair::new("id", 1)],
        )
        .await;
    assert!(updated.success, "update failed: {:?}", updated.errors);

    let selected = db
        .select(&["score"], "easy_mysql_scores", &[Pair::new("id", 1)])
        .await;
    assert!(selected.success);
    assert_eq!(selected.table.rows[0].get("score"), Some(&Value::Int(99)));

    let lowest = db
        .select(&[min("score")], "easy_mysql_scores", &[])
        .await;
    assert!(lowest.success, "aggregate select failed: {:?}", lowest.errors);
    assert_eq!(lowest.table.len(), 1);

    let deleted = db
        .delete("easy_mysql_scores", &[Pair::new("id", 2)])
        .await;
    assert!(deleted.success, "delete failed: {:?}", deleted.errors);

    let remaining = db.select::<&str>(&[], "easy_mysql_scores", &[]).await;
    assert_eq!(remaining.table.len(), 1);

    db.drop_table("easy_mysql_scores").await;
    db.disconnect().await;
}

#[tokio::test]
#[ignore = "requires a running MySQL server (set EASY_MYSQL_TEST_URL)"]
async fn second_connect_reuses_the_open_pool() {
    init_tracing();
    let Some(mut db) = test_db() else { return };

    let first = db.connect().await;
    assert!(first.connected, "connect failed: {:?}", first.errors);
    assert!(first.elapsed.is_some());

    let second = db.connect().await;
    assert!(second.connected);
    assert_eq!(second.elapsed, None, "open connection should be reused");

    db.disconnect().await;
}

#[tokio::test]
#[ignore = "requires a running MySQL server (set EASY_MYSQL_TEST_URL)"]
async fn outcome_close_disconnects_and_connect_replaces_the_pool() {
    init_tracing();
    let Some(mut db) = test_db() else { return };

    let outcome = db.select::<&str>(&[], "information_schema.tables", &[]).await;
    assert!(outcome.success, "select failed: {:?}", outcome.errors);

    outcome.close().await;

    // The stored pool is now closed; the next connect opens a fresh one.
    let reconnected = db.connect().await;
    assert!(reconnected.connected, "reconnect failed: {:?}", reconnected.errors);
    assert!(
        reconnected.elapsed.is_some(),
        "a closed pool must be replaced, not reused"
    );

    db.disconnect().await;
}
