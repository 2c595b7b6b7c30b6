use serde::{Deserialize, Serialize};

/// Outcome of loading one category file into a fresh index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    pub category: String,
    pub path: String,
    pub lines_read: usize,
    pub entries_indexed: usize,
    pub content_hash: String,
    pub loaded_at: String,
}

/// A recorded load compared against the file as it is on disk now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusFileStatus {
    pub category: String,
    pub path: String,
    pub line_count: usize,
    pub entry_count: usize,
    pub content_hash: String,
    pub loaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hash: Option<String>,
    pub changed_since_load: bool,
}
