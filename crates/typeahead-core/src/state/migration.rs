use rusqlite::Connection;

use crate::error::{Result, TypeaheadError};

use super::SqliteStateStore;

const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS search_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        searched_at TEXT NOT NULL,
        category TEXT NOT NULL,
        query TEXT NOT NULL,
        result_count INTEGER NOT NULL,
        results_text TEXT NOT NULL,
        latency_us INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_search_history_searched_at
    ON search_history(searched_at DESC);

    CREATE TABLE IF NOT EXISTS bookmarks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        query TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS corpus_files (
        category TEXT PRIMARY KEY,
        path TEXT NOT NULL,
        content_hash TEXT NOT NULL,
        line_count INTEGER NOT NULL,
        entry_count INTEGER NOT NULL,
        loaded_at TEXT NOT NULL
    );
";

impl SqliteStateStore {
    pub fn migrate(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| TypeaheadError::lock_poisoned("sqlite"))?;
        conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
        ensure_required_column(
            &conn,
            "search_history",
            "latency_us",
            "unsupported search_history schema: latency_us is missing; reset the state database",
        )?;
        ensure_required_column(
            &conn,
            "corpus_files",
            "entry_count",
            "unsupported corpus_files schema: entry_count is missing; reset the state database",
        )?;
        drop(conn);
        Ok(())
    }
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for row in rows {
        if row? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_required_column(
    conn: &Connection,
    table: &str,
    column: &str,
    error_message: &'static str,
) -> Result<()> {
    if has_column(conn, table, column)? {
        Ok(())
    } else {
        Err(TypeaheadError::Validation(error_message.to_string()))
    }
}
