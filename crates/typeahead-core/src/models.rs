mod corpus;
mod history;
mod request_log;
mod suggest;

pub use corpus::{CorpusFileStatus, CorpusReport};
pub use history::{Bookmark, HistoryExport, HistoryRecord, HistoryStats, QueryCount};
pub use request_log::{RequestLogEntry, RequestLogView};
pub use suggest::{SuggestRequest, SuggestResult};
