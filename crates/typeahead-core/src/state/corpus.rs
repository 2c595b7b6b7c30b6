use rusqlite::params;

use crate::error::Result;
use crate::models::CorpusReport;

use super::{SqliteStateStore, i64_to_usize_saturating, usize_to_i64_saturating};

impl SqliteStateStore {
    pub fn record_corpus_load(&self, report: &CorpusReport) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO corpus_files(category, path, content_hash, line_count, entry_count, loaded_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT(category) DO UPDATE SET
                  path=excluded.path,
                  content_hash=excluded.content_hash,
                  line_count=excluded.line_count,
                  entry_count=excluded.entry_count,
                  loaded_at=excluded.loaded_at
                ",
                params![
                    report.category,
                    report.path,
                    report.content_hash,
                    usize_to_i64_saturating(report.lines_read),
                    usize_to_i64_saturating(report.entries_indexed),
                    report.loaded_at
                ],
            )?;
            Ok(())
        })
    }

    pub fn list_corpus_loads(&self) -> Result<Vec<CorpusReport>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT category, path, content_hash, line_count, entry_count, loaded_at
                FROM corpus_files
                ORDER BY category ASC
                ",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(CorpusReport {
                    category: row.get(0)?,
                    path: row.get(1)?,
                    content_hash: row.get(2)?,
                    lines_read: i64_to_usize_saturating(row.get(3)?),
                    entries_indexed: i64_to_usize_saturating(row.get(4)?),
                    loaded_at: row.get(5)?,
                })
            })?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }
}
