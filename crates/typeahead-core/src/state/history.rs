use chrono::Utc;
use rusqlite::params;

use crate::error::Result;
use crate::models::HistoryRecord;

use super::{SqliteStateStore, i64_to_usize_saturating, usize_to_i64_saturating};

impl SqliteStateStore {
    pub fn record_search(
        &self,
        category: &str,
        query: &str,
        result_count: usize,
        results_text: &str,
        latency_us: i64,
    ) -> Result<HistoryRecord> {
        let searched_at = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO search_history(searched_at, category, query, result_count, results_text, latency_us)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    searched_at,
                    category,
                    query,
                    usize_to_i64_saturating(result_count),
                    results_text,
                    latency_us
                ],
            )?;
            Ok(HistoryRecord {
                id: conn.last_insert_rowid(),
                searched_at: searched_at.clone(),
                category: category.to_string(),
                query: query.to_string(),
                result_count,
                results_text: results_text.to_string(),
                latency_us,
            })
        })
    }

    /// Newest first; ties on timestamp break toward the later insert.
    pub fn list_history(&self, limit: usize) -> Result<Vec<HistoryRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, searched_at, category, query, result_count, results_text, latency_us
                FROM search_history
                ORDER BY searched_at DESC, id DESC
                LIMIT ?1
                ",
            )?;
            let rows = stmt.query_map(params![usize_to_i64_saturating(limit)], map_history_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Full history in insertion order, for export and stats.
    pub fn list_history_oldest_first(&self) -> Result<Vec<HistoryRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, searched_at, category, query, result_count, results_text, latency_us
                FROM search_history
                ORDER BY id ASC
                ",
            )?;
            let rows = stmt.query_map([], map_history_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    pub fn clear_history(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM search_history", [])?;
            Ok(affected)
        })
    }
}

fn map_history_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryRecord> {
    Ok(HistoryRecord {
        id: row.get(0)?,
        searched_at: row.get(1)?,
        category: row.get(2)?,
        query: row.get(3)?,
        result_count: i64_to_usize_saturating(row.get(4)?),
        results_text: row.get(5)?,
        latency_us: row.get(6)?,
    })
}
