use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Result of a line-tolerant JSONL read: good lines are kept, bad lines are
/// counted instead of failing the whole file.
#[derive(Debug, Clone)]
pub(crate) struct TolerantJsonl<T> {
    pub(crate) entries: Vec<T>,
    pub(crate) skipped_lines: usize,
    pub(crate) first_error: Option<(usize, String)>,
}

/// Reads a JSONL file, treating a missing file as empty. Blank lines are
/// ignored; undecodable lines are skipped and counted.
pub(crate) fn read_jsonl_tolerant<T>(path: &Path) -> Result<TolerantJsonl<T>>
where
    T: DeserializeOwned,
{
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };
    Ok(parse_jsonl_tolerant(&raw))
}

fn parse_jsonl_tolerant<T>(raw: &str) -> TolerantJsonl<T>
where
    T: DeserializeOwned,
{
    let mut entries = Vec::new();
    let mut skipped_lines = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(value) => entries.push(value),
            Err(err) => {
                skipped_lines += 1;
                if first_error.is_none() {
                    first_error = Some((line_no + 1, err.to_string()));
                }
            }
        }
    }

    TolerantJsonl {
        entries,
        skipped_lines,
        first_error,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tempfile::tempdir;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn keeps_good_lines_and_counts_bad_ones() {
        let raw = "{\"id\":1}\n\nnot json\n{\"id\":2}\n{\"id\":\"oops\"}\n";
        let outcome = parse_jsonl_tolerant::<Row>(raw);
        assert_eq!(outcome.entries, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(outcome.skipped_lines, 2);
        let (line_no, _) = outcome.first_error.expect("first error");
        assert_eq!(line_no, 3);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = tempdir().expect("tempdir");
        let outcome =
            read_jsonl_tolerant::<Row>(&temp.path().join("absent.jsonl")).expect("read");
        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.skipped_lines, 0);
        assert!(outcome.first_error.is_none());
    }
}
