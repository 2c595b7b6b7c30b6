use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{Timelike, Utc};
use serde_json::json;

use crate::error::Result;
use crate::export;
use crate::models::{HistoryExport, HistoryRecord, HistoryStats, QueryCount};

use super::Typeahead;

impl Typeahead {
    /// Returns the most recent searches, newest first.
    pub fn list_history(&self, limit: usize) -> Result<Vec<HistoryRecord>> {
        self.state.list_history(limit)
    }

    /// Deletes every history row and reports how many were removed.
    pub fn clear_history(&self) -> Result<usize> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        match self.state.clear_history() {
            Ok(removed) => {
                self.log_request_status(
                    request_id,
                    "history_clear",
                    "ok",
                    started,
                    Some(json!({ "removed": removed })),
                );
                Ok(removed)
            }
            Err(err) => {
                self.log_request_error(request_id, "history_clear", started, &err, None);
                Err(err)
            }
        }
    }

    /// Writes the full history as CSV to `to`, oldest row first so the file
    /// reads in chronological order.
    pub fn export_history_csv(&self, to: &Path) -> Result<HistoryExport> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let output = (|| -> Result<HistoryExport> {
            let rows = self.state.list_history_oldest_first()?;
            let csv = export::render_history_csv(&rows);
            if let Some(parent) = to.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(to, csv)?;
            Ok(HistoryExport {
                path: to.display().to_string(),
                rows_written: rows.len(),
            })
        })();

        match output {
            Ok(report) => {
                self.log_request_status(
                    request_id,
                    "history_export",
                    "ok",
                    started,
                    Some(json!({
                        "path": report.path,
                        "rows_written": report.rows_written,
                    })),
                );
                Ok(report)
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "history_export",
                    started,
                    &err,
                    Some(json!({ "path": to.display().to_string() })),
                );
                Err(err)
            }
        }
    }

    /// Aggregates the stored history into usage statistics. `top` caps the
    /// repeated-query leaderboard.
    pub fn history_stats(&self, top: usize) -> Result<HistoryStats> {
        let rows = self.state.list_history_oldest_first()?;
        Ok(compute_history_stats(&rows, top))
    }
}

fn compute_history_stats(rows: &[HistoryRecord], top: usize) -> HistoryStats {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut empty_result_searches = 0;
    let mut hourly = [0usize; 24];

    for row in rows {
        let key = row.query.trim().to_lowercase();
        *counts.entry(key).or_insert(0) += 1;
        if row.result_count == 0 {
            empty_result_searches += 1;
        }
        // Rows with a timestamp we cannot parse just fall out of the histogram.
        if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(&row.searched_at) {
            let hour = ts.with_timezone(&Utc).hour() as usize;
            hourly[hour] += 1;
        }
    }

    let distinct_queries = counts.len();
    let mut top_queries: Vec<QueryCount> = counts
        .into_iter()
        .map(|(query, count)| QueryCount { query, count })
        .collect();
    top_queries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.query.cmp(&b.query)));
    top_queries.truncate(top);

    HistoryStats {
        total_searches: rows.len(),
        distinct_queries,
        empty_result_searches,
        top_queries,
        hourly,
    }
}
