use std::path::{Path, PathBuf};

use crate::catalog;

const ENV_CORPUS_DIR: &str = "TYPEAHEAD_CORPUS_DIR";
const ENV_DEFAULT_CATEGORY: &str = "TYPEAHEAD_DEFAULT_CATEGORY";
const ENV_SUGGEST_LIMIT: &str = "TYPEAHEAD_SUGGEST_LIMIT";
const ENV_REQUEST_LOG: &str = "TYPEAHEAD_REQUEST_LOG";
const ENV_CORPUS_EXCLUDE: &str = "TYPEAHEAD_CORPUS_EXCLUDE";

const DEFAULT_CATEGORY: &str = "movies";
const DEFAULT_SUGGEST_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) corpus_dir: PathBuf,
    pub(crate) default_category: String,
    pub(crate) suggest_limit: usize,
    pub(crate) request_log_enabled: bool,
    pub(crate) corpus_exclude: Vec<String>,
}

impl AppConfig {
    pub(crate) fn from_env(root: &Path) -> Self {
        Self {
            corpus_dir: read_non_empty_env(ENV_CORPUS_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| catalog::default_corpus_dir(root)),
            default_category: read_non_empty_env(ENV_DEFAULT_CATEGORY)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            suggest_limit: read_env_usize(ENV_SUGGEST_LIMIT, DEFAULT_SUGGEST_LIMIT, 1),
            request_log_enabled: parse_enabled_default_true(
                std::env::var(ENV_REQUEST_LOG).ok().as_deref(),
            ),
            corpus_exclude: parse_csv_globs(std::env::var(ENV_CORPUS_EXCLUDE).ok().as_deref()),
        }
    }
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[must_use]
fn parse_enabled_default_true(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase())
            .as_deref(),
        Some("off" | "none" | "0" | "false")
    )
}

#[must_use]
fn parse_csv_globs(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
