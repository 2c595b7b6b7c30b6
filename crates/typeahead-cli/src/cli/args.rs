use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::parsers::{parse_limit, parse_min_one_usize};

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Prefix to complete; characters outside a-z and 0-9 end the match early.
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Corpus category to search. Defaults to the configured category.
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Category the session starts on. Defaults to the configured category.
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    List {
        #[arg(long, default_value_t = 20, value_parser = parse_min_one_usize)]
        limit: usize,
    },
    Export {
        /// Destination CSV path. Parent directories are created as needed.
        #[arg(long)]
        to: PathBuf,
    },
    Clear,
    Log {
        #[arg(long, default_value_t = 50, value_parser = parse_min_one_usize)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
pub struct BookmarkArgs {
    #[command(subcommand)]
    pub command: BookmarkCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookmarkCommand {
    Add { query: String },
    List,
    Clear,
}

#[derive(Debug, Args)]
pub struct CorpusArgs {
    #[command(subcommand)]
    pub command: CorpusCommand,
}

#[derive(Debug, Subcommand)]
pub enum CorpusCommand {
    List,
    Status,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, default_value_t = 10, value_parser = parse_min_one_usize)]
    pub top: usize,
}
