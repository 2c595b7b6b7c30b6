use chrono::Utc;
use rusqlite::params;

use crate::error::Result;
use crate::models::Bookmark;

use super::SqliteStateStore;

impl SqliteStateStore {
    pub fn add_bookmark(&self, query: &str) -> Result<Bookmark> {
        let created_at = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO bookmarks(query, created_at) VALUES (?1, ?2)",
                params![query, created_at],
            )?;
            Ok(Bookmark {
                id: conn.last_insert_rowid(),
                query: query.to_string(),
                created_at: created_at.clone(),
            })
        })
    }

    /// Oldest first, the order they were saved in.
    pub fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, query, created_at FROM bookmarks ORDER BY id ASC")?;
            let rows = stmt.query_map([], |row| {
                Ok(Bookmark {
                    id: row.get(0)?,
                    query: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    pub fn clear_bookmarks(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM bookmarks", [])?;
            Ok(affected)
        })
    }
}
