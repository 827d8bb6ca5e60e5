//! Postgres row store tests against a throwaway container.
//!
//! Require Docker: cargo test -- --ignored

mod common;

use crate::common::postgres::postgres_pool;
use approval_core::kernel::{BaseRowStore, PostgresRowStore};

fn unique_worksheet(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn append_list_and_update_round_through_postgres() {
    let store = PostgresRowStore::new(postgres_pool().await, unique_worksheet("stories"));
    store
        .ensure_worksheet(&["ID_HU", "Título", "Status"])
        .await
        .unwrap();

    store
        .append_row(vec!["HU-1".into(), "Login".into(), "Pendente".into()])
        .await
        .unwrap();
    store
        .append_row(vec!["HU-2".into(), "Logout".into()])
        .await
        .unwrap();

    store.update_cell(3, 3, "Aprovado".into()).await.unwrap();

    let sheet = store.list_rows().await.unwrap();
    assert_eq!(sheet.headers, vec!["ID_HU", "Título", "Status"]);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].index, 2);
    assert_eq!(sheet.rows[0].get("Status"), Some("Pendente"));
    assert_eq!(sheet.rows[1].get("Status"), Some("Aprovado"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn ensure_worksheet_keeps_existing_headers() {
    let name = unique_worksheet("votes");
    let pool = postgres_pool().await;

    let store = PostgresRowStore::new(pool.clone(), name.clone());
    store.ensure_worksheet(&["ID_HU", "Decisão"]).await.unwrap();

    let again = PostgresRowStore::new(pool, name);
    again
        .ensure_worksheet(&["ID_HU", "Stakeholder", "Decisão"])
        .await
        .unwrap();

    let sheet = again.list_rows().await.unwrap();
    assert_eq!(sheet.headers, vec!["ID_HU", "Decisão"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn update_of_missing_row_fails() {
    let store = PostgresRowStore::new(postgres_pool().await, unique_worksheet("stories"));
    store.ensure_worksheet(&["ID_HU"]).await.unwrap();

    assert!(store.update_cell(2, 1, "x".into()).await.is_err());
    assert!(store.update_cell(1, 1, "x".into()).await.is_err());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn unknown_worksheet_is_an_error() {
    let store = PostgresRowStore::new(postgres_pool().await, unique_worksheet("missing"));

    assert!(store.list_rows().await.is_err());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn concurrent_appends_are_all_kept() {
    let store = std::sync::Arc::new(PostgresRowStore::new(
        postgres_pool().await,
        unique_worksheet("votes"),
    ));
    store.ensure_worksheet(&["ID_HU", "Decisão"]).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .append_row(vec!["HU-1".into(), format!("vote-{}", i)])
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.list_rows().await.unwrap().rows.len(), 20);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn rows_wider_than_the_header_are_rejected() {
    let store = PostgresRowStore::new(postgres_pool().await, unique_worksheet("votes"));
    store.ensure_worksheet(&["ID_HU", "Decisão"]).await.unwrap();

    let err = store
        .append_row(vec!["HU-1".into(), "Aprovado".into(), "extra".into()])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("3 cells"));
    assert!(store.update_cell(2, 3, "x".into()).await.is_err());

    assert!(store.list_rows().await.unwrap().rows.is_empty());
}
