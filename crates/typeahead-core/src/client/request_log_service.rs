use std::io::Write;
use std::path::Path;
use std::time::Instant;

use chrono::Utc;

use crate::catalog;
use crate::error::{Result, TypeaheadError};
use crate::jsonl;
use crate::models::{RequestLogEntry, RequestLogView};

use super::Typeahead;

impl Typeahead {
    /// Best-effort append; a logging failure never fails the operation.
    pub(super) fn try_log_request(&self, entry: &RequestLogEntry) {
        if !self.config.request_log_enabled {
            return;
        }
        if let Ok(serialized) = serde_json::to_string(entry) {
            let mut line = serialized;
            line.push('\n');
            let _ = append_line(&catalog::request_log_path(&self.root), &line);
        }
    }

    pub(super) fn log_request_status(
        &self,
        request_id: String,
        operation: &str,
        status: &str,
        started: Instant,
        details: Option<serde_json::Value>,
    ) {
        self.try_log_request(&RequestLogEntry {
            request_id,
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            error_code: None,
            error_message: None,
            details,
        });
    }

    pub(super) fn log_request_error(
        &self,
        request_id: String,
        operation: &str,
        started: Instant,
        err: &TypeaheadError,
        details: Option<serde_json::Value>,
    ) {
        self.try_log_request(&RequestLogEntry {
            request_id,
            operation: operation.to_string(),
            status: "error".to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            error_code: Some(err.code().to_string()),
            error_message: Some(err.to_string()),
            details,
        });
    }

    /// Newest-first view of the request log, skipping undecodable lines.
    pub fn read_request_log(&self, limit: usize) -> Result<RequestLogView> {
        let outcome = jsonl::read_jsonl_tolerant::<RequestLogEntry>(&catalog::request_log_path(
            &self.root,
        ))?;
        let mut entries = outcome.entries;
        entries.reverse();
        entries.truncate(limit);
        Ok(RequestLogView {
            entries,
            skipped_lines: outcome.skipped_lines,
            first_error: outcome
                .first_error
                .map(|(line_no, message)| format!("line {line_no}: {message}")),
        })
    }
}

fn append_line(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
