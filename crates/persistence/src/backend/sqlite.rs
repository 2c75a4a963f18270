// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Row shape for `PRAGMA journal_mode`.
#[derive(QueryableByName)]
struct JournalModeRow {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Get the last inserted row ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    // NOTE: last_insert_rowid() has no Diesel DSL equivalent
    diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()"))
        .get_result::<i64>(conn)
        .map_err(PersistenceError::from)
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::Migration(e.to_string()))?;
    Ok(())
}

/// Initialize a `SQLite` database at the given URL and run migrations.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (e.g., `":memory:"` or file path)
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    // Writers queue behind each other's immediate transactions instead of failing.
    diesel::sql_query("PRAGMA busy_timeout = 5000")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::Query(e.to_string()))?;

    run_migrations(&mut conn)?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// Returns the journal mode `SQLite` reports afterwards.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<String, PersistenceError> {
    // NOTE: PRAGMA is raw SQL (Diesel has no PRAGMA DSL)
    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode = WAL")
        .get_result::<JournalModeRow>(conn)
        .map_err(|e| PersistenceError::Query(e.to_string()))?;
    info!(journal_mode = %row.journal_mode, "SQLite journal mode set");
    Ok(row.journal_mode)
}
