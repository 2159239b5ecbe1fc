use std::future::Future;

use anyhow::{Context, Result};
use tessera_data::{Database, User, UserStore};
use tessera_test_support::postgres::start_postgres;

async fn with_database<F, Fut>(name: &str, test: F) -> Result<()>
where
    F: FnOnce(Database) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let postgres = match start_postgres() {
        Ok(db) => db,
        Err(err) => {
            eprintln!("skipping {name}: {err}");
            return Ok(());
        }
    };

    let database =
        Database::new(postgres.connection_string()).context("failed to build database handle")?;
    database
        .migrate()
        .await
        .context("failed to apply users migration")?;

    let result = test(database.clone()).await;
    database.pool().close().await;
    drop(postgres);
    result
}

#[tokio::test]
async fn get_user_returns_inserted_row() -> Result<()> {
    with_database("get_user_returns_inserted_row", |db| async move {
        let created = db.create_user("ada", "ada@example.com").await?;
        assert!(created.id > 0);

        let fetched = db.get_user(created.id).await?;
        assert_eq!(fetched, created);
        assert_eq!(fetched.username, "ada");
        assert_eq!(fetched.email, "ada@example.com");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn get_user_surfaces_row_not_found_unmodified() -> Result<()> {
    with_database("get_user_surfaces_row_not_found_unmodified", |db| async move {
        let err = db
            .get_user(-1)
            .await
            .expect_err("negative ids are queried, not rejected");
        assert!(matches!(err, sqlx::Error::RowNotFound), "unexpected: {err:?}");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn update_and_delete_report_affected_rows() -> Result<()> {
    with_database("update_and_delete_report_affected_rows", |db| async move {
        let created = db.create_user("grace", "grace@example.com").await?;
        let renamed = User {
            username: "hopper".to_string(),
            ..created.clone()
        };

        assert_eq!(db.update_user(&renamed).await?, 1);
        assert_eq!(db.get_user(created.id).await?.username, "hopper");

        assert_eq!(db.delete_user(created.id).await?, 1);
        assert_eq!(db.delete_user(created.id).await?, 0);
        assert!(matches!(
            db.get_user(created.id).await,
            Err(sqlx::Error::RowNotFound)
        ));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn queries_fail_verbatim_when_table_is_missing() -> Result<()> {
    with_database("queries_fail_verbatim_when_table_is_missing", |db| async move {
        sqlx::query("DROP TABLE users").execute(db.pool()).await?;
        let err = db.get_user(1).await.expect_err("table was dropped");
        let sqlx::Error::Database(database_error) = &err else {
            panic!("expected a database error, got {err:?}");
        };
        assert_eq!(database_error.code().as_deref(), Some("42P01"));
        Ok(())
    })
    .await
}
