use std::time::Instant;

use serde_json::json;

use crate::error::{Result, TypeaheadError};
use crate::models::Bookmark;

use super::Typeahead;

impl Typeahead {
    /// Saves a query for later. Duplicates are kept; the list is a log, not a
    /// set.
    pub fn add_bookmark(&self, query: &str) -> Result<Bookmark> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let output = (|| -> Result<Bookmark> {
            let trimmed = query.trim();
            if trimmed.is_empty() {
                return Err(TypeaheadError::Validation(
                    "bookmark query must not be empty".to_string(),
                ));
            }
            self.state.add_bookmark(trimmed)
        })();

        match output {
            Ok(bookmark) => {
                self.log_request_status(
                    request_id,
                    "bookmark_add",
                    "ok",
                    started,
                    Some(json!({ "id": bookmark.id, "query": bookmark.query })),
                );
                Ok(bookmark)
            }
            Err(err) => {
                self.log_request_error(
                    request_id,
                    "bookmark_add",
                    started,
                    &err,
                    Some(json!({ "query": query })),
                );
                Err(err)
            }
        }
    }

    /// Returns every bookmark in the order it was saved.
    pub fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.state.list_bookmarks()
    }

    /// Deletes every bookmark and reports how many were removed.
    pub fn clear_bookmarks(&self) -> Result<usize> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        match self.state.clear_bookmarks() {
            Ok(removed) => {
                self.log_request_status(
                    request_id,
                    "bookmark_clear",
                    "ok",
                    started,
                    Some(json!({ "removed": removed })),
                );
                Ok(removed)
            }
            Err(err) => {
                self.log_request_error(request_id, "bookmark_clear", started, &err, None);
                Err(err)
            }
        }
    }
}
