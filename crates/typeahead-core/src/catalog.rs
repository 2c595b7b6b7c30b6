use std::path::{Path, PathBuf};

use crate::error::{Result, TypeaheadError};

pub(crate) const CORPUS_FILE_EXT: &str = "txt";

pub(crate) fn state_db_path(root: &Path) -> PathBuf {
    root.join("state.sqlite3")
}

pub(crate) fn logs_dir(root: &Path) -> PathBuf {
    root.join("logs")
}

pub(crate) fn request_log_path(root: &Path) -> PathBuf {
    logs_dir(root).join("requests.jsonl")
}

pub(crate) fn default_corpus_dir(root: &Path) -> PathBuf {
    root.join("corpus")
}

pub(crate) fn corpus_file_path(corpus_dir: &Path, category: &str) -> Result<PathBuf> {
    let name = sanitize_category(category)?;
    Ok(corpus_dir.join(format!("{name}.{CORPUS_FILE_EXT}")))
}

/// Lowercases a category name and keeps only `[a-z0-9_-]`, so a category can
/// never resolve to a path outside the corpus directory.
pub(crate) fn sanitize_category(input: &str) -> Result<String> {
    let mut out = String::new();
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if c == '-' || c == '_' {
            out.push(c);
        }
    }
    if out.is_empty() {
        return Err(TypeaheadError::Validation(format!(
            "category name has no usable characters: {input:?}"
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn sanitize_category_folds_and_filters() {
        assert_eq!(sanitize_category("Movies").expect("sanitize"), "movies");
        assert_eq!(sanitize_category("sci_fi").expect("sanitize"), "sci_fi");
        assert_eq!(sanitize_category("Top 100!").expect("sanitize"), "top100");
    }

    #[test]
    fn sanitize_category_rejects_names_with_nothing_usable() {
        let err = sanitize_category("!!!").expect_err("must reject");
        assert_eq!(err.code(), "VALIDATION_FAILED");
    }

    #[test]
    fn corpus_file_path_cannot_escape_the_corpus_dir() {
        let path = corpus_file_path(Path::new("/data/corpus"), "../../etc/passwd")
            .expect("sanitized path");
        assert_eq!(path, Path::new("/data/corpus/etcpasswd.txt"));
    }

    #[test]
    fn state_and_log_paths_hang_off_the_root() {
        let root = Path::new("/tmp/th");
        assert_eq!(state_db_path(root), Path::new("/tmp/th/state.sqlite3"));
        assert_eq!(
            request_log_path(root),
            Path::new("/tmp/th/logs/requests.jsonl")
        );
    }
}
