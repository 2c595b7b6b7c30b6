use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    pub searched_at: String,
    pub category: String,
    pub query: String,
    pub result_count: usize,
    pub results_text: String,
    pub latency_us: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub id: i64,
    pub query: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryCount {
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_searches: usize,
    pub distinct_queries: usize,
    pub empty_result_searches: usize,
    pub top_queries: Vec<QueryCount>,
    /// Searches bucketed by UTC hour of day, index 0 = midnight.
    pub hourly: [usize; 24],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExport {
    pub path: String,
    pub rows_written: usize,
}
