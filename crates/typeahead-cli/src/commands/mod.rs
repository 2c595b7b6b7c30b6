use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use typeahead_core::Typeahead;
use typeahead_core::models::SuggestRequest;

use crate::cli::{BookmarkCommand, Commands, CorpusCommand, HistoryCommand};

mod interactive;


pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = Typeahead::new(root).context("failed to open typeahead root")?;
    app.initialize().context("failed to prepare root layout")?;
    run_validated(&app, root, command)
}

fn run_validated(app: &Typeahead, root: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            println!("initialized at {}", root.display());
        }
        Commands::Suggest(args) => {
            let result = app.suggest(&SuggestRequest {
                query: args.query,
                category: args.category,
                limit: args.limit,
            })?;
            let mut stdout = io::stdout().lock();
            for entry in &result.matches {
                writeln!(stdout, "{entry}")?;
            }
        }
        Commands::Interactive(args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive::run_session(app, args.category, args.limit, stdin.lock(), stdout.lock())?;
        }
        Commands::History(args) => match args.command {
            HistoryCommand::List { limit } => {
                let rows = app.list_history(limit)?;
                print_json(&rows)?;
            }
            HistoryCommand::Export { to } => {
                let report = app.export_history_csv(&to)?;
                print_json(&report)?;
            }
            HistoryCommand::Clear => {
                let removed = app.clear_history()?;
                print_json(&serde_json::json!({
                    "status": "ok",
                    "removed": removed,
                }))?;
            }
            HistoryCommand::Log { limit } => {
                let view = app.read_request_log(limit)?;
                print_json(&view)?;
            }
        },
        Commands::Bookmark(args) => match args.command {
            BookmarkCommand::Add { query } => {
                let bookmark = app.add_bookmark(&query)?;
                print_json(&bookmark)?;
            }
            BookmarkCommand::List => {
                let bookmarks = app.list_bookmarks()?;
                print_json(&bookmarks)?;
            }
            BookmarkCommand::Clear => {
                let removed = app.clear_bookmarks()?;
                print_json(&serde_json::json!({
                    "status": "ok",
                    "removed": removed,
                }))?;
            }
        },
        Commands::Corpus(args) => match args.command {
            CorpusCommand::List => {
                let categories = app.list_categories()?;
                print_json(&categories)?;
            }
            CorpusCommand::Status => {
                let statuses = app.corpus_status()?;
                print_json(&statuses)?;
            }
        },
        Commands::Stats(args) => {
            let stats = app.history_stats(args.top)?;
            print_json(&stats)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
