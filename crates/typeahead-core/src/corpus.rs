use std::path::Path;

use chrono::Utc;
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::catalog::{self, CORPUS_FILE_EXT};
use crate::error::{Result, TypeaheadError};
use crate::models::CorpusReport;
use crate::trie::PrefixIndex;

#[derive(Debug)]
pub struct LoadedCorpus {
    pub index: PrefixIndex,
    pub report: CorpusReport,
}

/// Loads one category file (`<corpus_dir>/<category>.txt`) into a fresh index.
///
/// Every line is trimmed and inserted, blank lines included; filtering and
/// deduplication are the index's concern. The report carries a BLAKE3 hash of
/// the file bytes so later loads can detect on-disk changes.
pub fn load_category(corpus_dir: &Path, category: &str) -> Result<LoadedCorpus> {
    let path = catalog::corpus_file_path(corpus_dir, category)?;
    if !path.is_file() {
        return Err(TypeaheadError::NotFound(format!(
            "corpus file for category {category:?}: {}",
            path.display()
        )));
    }
    let bytes = std::fs::read(&path)?;
    let content_hash = blake3::hash(&bytes).to_hex().to_string();
    let text = String::from_utf8_lossy(&bytes);

    let mut index = PrefixIndex::new();
    let mut lines_read = 0usize;
    for line in text.lines() {
        lines_read += 1;
        index.insert(line.trim());
    }

    let report = CorpusReport {
        category: catalog::sanitize_category(category)?,
        path: path.display().to_string(),
        lines_read,
        entries_indexed: index.len(),
        content_hash,
        loaded_at: Utc::now().to_rfc3339(),
    };
    Ok(LoadedCorpus { index, report })
}

/// Lists category names (file stems) of `*.txt` files directly under the
/// corpus directory, minus any configured exclude globs, sorted.
pub fn discover_categories(corpus_dir: &Path, exclude: &[String]) -> Result<Vec<String>> {
    if !corpus_dir.exists() {
        return Ok(Vec::new());
    }
    let matcher = build_exclude_set(exclude)?;

    let mut categories = Vec::new();
    for item in WalkDir::new(corpus_dir).follow_links(false).max_depth(1) {
        let item = item.map_err(|e| TypeaheadError::Validation(e.to_string()))?;
        if !item.file_type().is_file() {
            continue;
        }
        let path = item.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(CORPUS_FILE_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let file_name = item.file_name().to_string_lossy();
        if matcher
            .as_ref()
            .is_some_and(|set| set.is_match(file_name.as_ref()))
        {
            continue;
        }
        categories.push(stem.to_string());
    }
    categories.sort();
    Ok(categories)
}

/// Hash of the file as it is on disk now; `None` when the file is gone.
pub(crate) fn current_file_hash(path: &Path) -> Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(blake3::hash(&bytes).to_hex().to_string())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| TypeaheadError::Validation(e.to_string()))?);
    }
    let set = builder
        .build()
        .map_err(|e| TypeaheadError::Validation(e.to_string()))?;
    Ok(Some(set))
}
