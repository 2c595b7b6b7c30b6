use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::catalog;
use crate::corpus;
use crate::error::{Result, TypeaheadError};
use crate::models::{CorpusFileStatus, CorpusReport};

use super::Typeahead;

impl Typeahead {
    /// Loads one corpus file into the in-memory index, replacing whatever was
    /// active before, and records the load in the state store.
    pub fn load_category(&self, category: &str) -> Result<CorpusReport> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let output = (|| -> Result<CorpusReport> {
            let loaded = corpus::load_category(&self.config.corpus_dir, category)?;
            self.state.record_corpus_load(&loaded.report)?;

            let mut index = self
                .index
                .write()
                .map_err(|_| TypeaheadError::lock_poisoned("index"))?;
            *index = loaded.index;
            drop(index);

            let mut active = self
                .active_category
                .write()
                .map_err(|_| TypeaheadError::lock_poisoned("active category"))?;
            *active = Some(loaded.report.category.clone());
            drop(active);

            Ok(loaded.report)
        })();

        match output {
            Ok(report) => {
                self.log_request_status(
                    request_id,
                    "corpus_load",
                    "ok",
                    started,
                    Some(json!({
                        "category": report.category,
                        "entries_indexed": report.entries_indexed,
                        "lines_read": report.lines_read,
                    })),
                );
                Ok(report)
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "corpus_load",
                    started,
                    &err,
                    Some(json!({ "category": category })),
                );
                Err(err)
            }
        }
    }

    /// Makes sure the index holds the requested category, loading it on a
    /// miss. `None` falls back to the configured default category.
    pub(super) fn ensure_category_loaded(&self, requested: Option<&str>) -> Result<String> {
        let wanted = match requested {
            Some(name) => catalog::sanitize_category(name)?,
            None => self.config.default_category.clone(),
        };

        let active = self
            .active_category
            .read()
            .map_err(|_| TypeaheadError::lock_poisoned("active category"))?;
        if active.as_deref() == Some(wanted.as_str()) {
            return Ok(wanted);
        }
        drop(active);

        let report = self.load_category(&wanted)?;
        Ok(report.category)
    }

    /// Lists the categories available on disk, honoring the exclude globs.
    pub fn list_categories(&self) -> Result<Vec<String>> {
        corpus::discover_categories(&self.config.corpus_dir, &self.config.corpus_exclude)
    }

    /// Reports every corpus file the store has seen, with a freshness check
    /// of the on-disk content against the hash captured at load time.
    pub fn corpus_status(&self) -> Result<Vec<CorpusFileStatus>> {
        let loads = self.state.list_corpus_loads()?;
        let mut statuses = Vec::with_capacity(loads.len());
        for load in loads {
            let current_hash = corpus::current_file_hash(Path::new(&load.path))?;
            let changed_since_load =
                current_hash.as_deref() != Some(load.content_hash.as_str());
            statuses.push(CorpusFileStatus {
                category: load.category,
                path: load.path,
                line_count: load.lines_read,
                entry_count: load.entries_indexed,
                content_hash: load.content_hash,
                loaded_at: load.loaded_at,
                current_hash,
                changed_since_load,
            });
        }
        Ok(statuses)
    }
}
