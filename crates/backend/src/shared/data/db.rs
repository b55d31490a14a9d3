use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Tables of the related entities and the memo host form.
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_customer",
        r#"
        CREATE TABLE IF NOT EXISTS a001_customer (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            logo_path TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "a002_tag",
        r#"
        CREATE TABLE IF NOT EXISTS a002_tag (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            color TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "a002_tag",
        // Имена тегов уникальны без учёта регистра
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS ux_a002_tag_name
            ON a002_tag (name COLLATE NOCASE);
        "#,
    ),
    (
        "a003_memo",
        r#"
        CREATE TABLE IF NOT EXISTS a003_memo (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            customer_id INTEGER REFERENCES a001_customer(id),
            tag_ids TEXT NOT NULL DEFAULT '[]',
            created_at TEXT
        );
        "#,
    ),
];

/// Opens (creating if needed) the SQLite file and makes sure the schema exists.
pub async fn connect(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("failed to prepare table {table}: {e}"))?;
        tracing::debug!("Table {} is ready", table);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_schema_twice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.db");

        let conn = connect(&path).await.unwrap();
        drop(conn);
        // Second start must not fail on existing tables
        let conn = connect(&path).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name LIKE 'a00%' ORDER BY name"
                    .to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["a001_customer", "a002_tag", "a003_memo"]);
    }

    #[tokio::test]
    async fn test_tag_names_are_unique_ignoring_case() {
        let dir = tempfile::tempdir().unwrap();
        let conn = connect(&dir.path().join("app.db")).await.unwrap();

        conn.execute_unprepared("INSERT INTO a002_tag (name) VALUES ('Urgent')")
            .await
            .unwrap();
        let err = conn
            .execute_unprepared("INSERT INTO a002_tag (name) VALUES ('URGENT')")
            .await
            .unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ));
    }
}
