//! Database migration system
//!
//! Fresh databases receive the full schema at the current version.
//! Older databases are migrated one version at a time, each step recorded
//! in `schema_migrations` with its checksum.

use sqlx::{SqliteConnection, SqlitePool};

use super::error::SqliteError;
use super::schema::{MIGRATION_V2, SCHEMA, SCHEMA_VERSION};
use crate::utils::crypto::sha256_hex;
use crate::utils::sql::fold_case;

/// Data step run in the migration transaction after its statements
#[derive(Debug, Clone, Copy)]
enum Backfill {
    FoldedText,
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteError> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        tracing::debug!(
            "Initializing database with schema version {}",
            SCHEMA_VERSION
        );
        apply_initial_schema(pool).await?;
        return Ok(());
    }

    let current_version: i32 =
        sqlx::query_scalar("SELECT version FROM schema_version WHERE id = 1")
            .fetch_optional(pool)
            .await?
            .unwrap_or(0);

    if current_version >= SCHEMA_VERSION {
        tracing::debug!(
            "Database schema is up to date (version {})",
            current_version
        );
        return Ok(());
    }

    for version in (current_version + 1)..=SCHEMA_VERSION {
        tracing::debug!("Applying migration to version {}", version);
        apply_migration(pool, version).await?;
    }

    Ok(())
}

async fn apply_initial_schema(pool: &SqlitePool) -> Result<(), SqliteError> {
    let start = std::time::Instant::now();

    let mut tx = pool.begin().await?;

    sqlx::query(SCHEMA).execute(&mut *tx).await?;

    let now = chrono::Utc::now().timestamp_millis();
    sqlx::query(
        "INSERT INTO schema_version (id, version, applied_at, description) VALUES (1, ?, ?, 'Initial schema')",
    )
    .bind(SCHEMA_VERSION)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let checksum = sha256_hex(SCHEMA);
    let elapsed_ms = start.elapsed().as_millis() as i64;
    sqlx::query(
        "INSERT INTO schema_migrations (version, name, applied_at, checksum, execution_time_ms, success) VALUES (?, ?, ?, ?, ?, 1)",
    )
    .bind(SCHEMA_VERSION)
    .bind("initial_schema")
    .bind(now)
    .bind(&checksum)
    .bind(elapsed_ms)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Applied initial schema in {}ms", elapsed_ms);
    Ok(())
}

async fn apply_migration(pool: &SqlitePool, version: i32) -> Result<(), SqliteError> {
    match version {
        // Version 1 only exists as an initial schema
        1 => Ok(()),
        2 => {
            apply_versioned_migration(
                pool,
                2,
                "add_folded_text_columns",
                MIGRATION_V2,
                Some(Backfill::FoldedText),
            )
            .await
        }
        _ => Err(SqliteError::MigrationFailed {
            version,
            name: "unknown".to_string(),
            error: format!("Unknown migration version: {}", version),
        }),
    }
}

/// Apply a versioned migration with tracking
async fn apply_versioned_migration(
    pool: &SqlitePool,
    version: i32,
    name: &str,
    sql: &str,
    backfill: Option<Backfill>,
) -> Result<(), SqliteError> {
    let start = std::time::Instant::now();

    let mut tx = pool.begin().await?;

    for statement in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| SqliteError::MigrationFailed {
                version,
                name: name.to_string(),
                error: format!(
                    "Failed at statement: {} - {}",
                    statement.chars().take(50).collect::<String>(),
                    e
                ),
            })?;
    }

    if let Some(Backfill::FoldedText) = backfill {
        let rows = backfill_folded_text(&mut *tx)
            .await
            .map_err(|e| SqliteError::MigrationFailed {
                version,
                name: name.to_string(),
                error: format!("Backfill failed - {}", e),
            })?;
        tracing::debug!(rows, "Backfilled folded text columns");
    }

    let now = chrono::Utc::now().timestamp_millis();
    sqlx::query(
        "UPDATE schema_version SET version = ?, applied_at = ?, description = ? WHERE id = 1",
    )
    .bind(version)
    .bind(now)
    .bind(name)
    .execute(&mut *tx)
    .await?;

    let checksum = sha256_hex(sql);
    let elapsed_ms = start.elapsed().as_millis() as i64;
    sqlx::query(
        "INSERT INTO schema_migrations (version, name, applied_at, checksum, execution_time_ms, success) VALUES (?, ?, ?, ?, ?, 1)",
    )
    .bind(version)
    .bind(name)
    .bind(now)
    .bind(&checksum)
    .bind(elapsed_ms)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        "Applied migration v{} ({}) in {}ms",
        version,
        name,
        elapsed_ms
    );
    Ok(())
}

/// Fill `name_lower`/`title_lower` for existing rows
async fn backfill_folded_text(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let rows: Vec<(i64, String, String)> = sqlx::query_as("SELECT id, name, title FROM players")
        .fetch_all(&mut *conn)
        .await?;

    for (id, name, title) in &rows {
        sqlx::query("UPDATE players SET name_lower = ?, title_lower = ? WHERE id = ?")
            .bind(fold_case(name))
            .bind(fold_case(title))
            .bind(id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(rows.len() as u64)
}
