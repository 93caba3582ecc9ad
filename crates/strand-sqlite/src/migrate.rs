//! Schema setup for string databases
//!
//! Versioned migrations are embedded at compile time and recorded in
//! `schema_migrations`. After they run, `strings` tables left by older
//! deployments get any missing `properties` / `created_at` columns added.

use std::collections::HashSet;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// One embedded schema step.
struct Migration {
    version: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "000",
        sql: include_str!("../migrations/000_create_schema_migrations.sql"),
    },
    Migration {
        version: "001",
        sql: include_str!("../migrations/001_create_strings_table.sql"),
    },
];

/// Columns that older `strings` tables may lack.
const REPAIRABLE_COLUMNS: &[(&str, &str)] = &[
    ("properties", "ALTER TABLE strings ADD COLUMN properties TEXT;"),
    ("created_at", "ALTER TABLE strings ADD COLUMN created_at TEXT;"),
];

/// Bring `conn` up to the current schema.
///
/// Safe to call on every startup: applied versions are skipped and the column
/// repair only touches what is missing.
pub fn migrate(conn: &Connection) -> Result<()> {
    let applied = applied_versions(conn)?;

    for migration in MIGRATIONS.iter().filter(|m| !applied.contains(m.version)) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, CURRENT_TIMESTAMP)",
            [migration.version],
        )?;
        tx.commit()?;
        debug!(version = migration.version, "applied migration");
    }

    repair_columns(conn)
}

/// Versions already recorded; empty on a fresh database.
fn applied_versions(conn: &Connection) -> Result<HashSet<String>> {
    let has_table = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'")?
        .exists([])?;
    if !has_table {
        return Ok(HashSet::new());
    }

    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let versions = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<HashSet<String>, rusqlite::Error>>()?;
    Ok(versions)
}

/// Names of the columns currently on the `strings` table.
fn string_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info(strings)")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;
    Ok(columns)
}

fn repair_columns(conn: &Connection) -> Result<()> {
    let columns = string_columns(conn)?;

    let added: Vec<&str> = REPAIRABLE_COLUMNS
        .iter()
        .filter(|(name, _)| !columns.iter().any(|c| c == name))
        .map(|(name, alter)| conn.execute_batch(alter).map(|_| *name))
        .collect::<std::result::Result<_, rusqlite::Error>>()?;

    if !added.is_empty() {
        info!(
            "⊔ database schema updated: added missing columns -> {}",
            added.join(", ")
        );
    }
    Ok(())
}
