use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::catalog;
use crate::config::AppConfig;
use crate::error::{Result, TypeaheadError};
use crate::state::SqliteStateStore;
use crate::trie::PrefixIndex;

mod bookmark_service;
mod corpus_service;
mod history_service;
mod request_log_service;
mod suggest_service;

/// Facade over the suggestion engine: one loaded category index, the state
/// store, and the request log, rooted at a workspace directory.
#[derive(Clone)]
pub struct Typeahead {
    root: PathBuf,
    config: AppConfig,
    state: SqliteStateStore,
    index: Arc<RwLock<PrefixIndex>>,
    active_category: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for Typeahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeahead").finish_non_exhaustive()
    }
}

impl Typeahead {
    pub fn new(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let config = AppConfig::from_env(&root);
        let state = SqliteStateStore::open(catalog::state_db_path(&root))?;

        Ok(Self {
            root,
            config,
            state,
            index: Arc::new(RwLock::new(PrefixIndex::new())),
            active_category: Arc::new(RwLock::new(None)),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(&self.config.corpus_dir)?;
        fs::create_dir_all(catalog::logs_dir(&self.root))?;
        Ok(())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn default_category(&self) -> &str {
        &self.config.default_category
    }

    #[must_use]
    pub fn default_limit(&self) -> usize {
        self.config.suggest_limit
    }

    /// Category whose corpus currently backs the index, if one was loaded.
    pub fn active_category(&self) -> Result<Option<String>> {
        let guard = self
            .active_category
            .read()
            .map_err(|_| TypeaheadError::lock_poisoned("active category"))?;
        Ok(guard.clone())
    }
}
