use std::time::Instant;

use chrono::Utc;
use serde_json::json;

use crate::error::{Result, TypeaheadError};
use crate::models::{RequestLogEntry, SuggestRequest, SuggestResult};

use super::Typeahead;

impl Typeahead {
    /// Runs one suggestion query against the requested (or default) category,
    /// records it in the search history, and logs the request.
    pub fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResult> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();
        let requested_limit = request.limit.unwrap_or(self.config.suggest_limit);

        let output = (|| -> Result<SuggestResult> {
            let category = self.ensure_category_loaded(request.category.as_deref())?;
            let index = self
                .index
                .read()
                .map_err(|_| TypeaheadError::lock_poisoned("index"))?;
            let search_started = Instant::now();
            let matches = index.search(&request.query, requested_limit);
            drop(index);
            let latency_us =
                u64::try_from(search_started.elapsed().as_micros()).unwrap_or(u64::MAX);

            let result = SuggestResult {
                query: request.query.clone(),
                category,
                limit: requested_limit,
                matches,
                latency_us,
            };
            self.record_search_result(&result)?;
            Ok(result)
        })();

        match output {
            Ok(result) => {
                self.try_log_request(&RequestLogEntry {
                    request_id,
                    operation: "suggest".to_string(),
                    status: "ok".to_string(),
                    latency_ms: started.elapsed().as_millis(),
                    created_at: Utc::now().to_rfc3339(),
                    error_code: None,
                    error_message: None,
                    details: Some(json!({
                        "query": result.query,
                        "category": result.category,
                        "limit": result.limit,
                        "result_count": result.matches.len(),
                    })),
                });
                Ok(result)
            }
            Err(err) => {
                self.try_log_request(&RequestLogEntry {
                    request_id,
                    operation: "suggest".to_string(),
                    status: "error".to_string(),
                    latency_ms: started.elapsed().as_millis(),
                    created_at: Utc::now().to_rfc3339(),
                    error_code: Some(err.code().to_string()),
                    error_message: Some(err.to_string()),
                    details: Some(json!({
                        "query": request.query,
                        "category": request.category,
                        "limit": requested_limit,
                    })),
                });
                Err(err)
            }
        }
    }

    /// Adds one entry to the live index without touching the corpus file.
    pub fn insert(&self, key: &str) -> Result<()> {
        let mut index = self
            .index
            .write()
            .map_err(|_| TypeaheadError::lock_poisoned("index"))?;
        index.insert(key);
        Ok(())
    }

    fn record_search_result(&self, result: &SuggestResult) -> Result<()> {
        let results_text = result.matches.join("|");
        self.state.record_search(
            &result.category,
            &result.query,
            result.matches.len(),
            &results_text,
            i64::try_from(result.latency_us).unwrap_or(i64::MAX),
        )?;
        Ok(())
    }
}
