// Every fallible API in this crate returns `TypeaheadError`.
#![allow(
    clippy::missing_errors_doc,
    reason = "one concrete error type crate-wide; per-item `# Errors` sections would all say the same thing"
)]

pub mod alphabet;
pub(crate) mod catalog;
pub mod client;
pub(crate) mod config;
pub mod corpus;
pub mod error;
pub(crate) mod export;
pub(crate) mod jsonl;
pub mod models;
pub mod state;
pub mod trie;

pub use client::Typeahead;
pub use error::{Result, TypeaheadError};
pub use trie::PrefixIndex;
