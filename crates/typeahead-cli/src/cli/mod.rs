use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
pub(crate) mod parsers;


pub use args::{
    BookmarkArgs, BookmarkCommand, CorpusArgs, CorpusCommand, HistoryArgs, HistoryCommand,
    InteractiveArgs, StatsArgs, SuggestArgs,
};

#[derive(Debug, Parser)]
#[command(name = "typeahead")]
#[command(about = "Prefix autocomplete over plain-text corpora", version)]
pub struct Cli {
    #[arg(long, default_value = ".typeahead")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Init,
    Suggest(SuggestArgs),
    Interactive(InteractiveArgs),
    History(HistoryArgs),
    Bookmark(BookmarkArgs),
    Corpus(CorpusArgs),
    Stats(StatsArgs),
}
