use std::io::{BufRead, Write};

use anyhow::Result;
use typeahead_core::Typeahead;
use typeahead_core::models::SuggestRequest;

use crate::cli::parsers::parse_limit;

const HELP_TEXT: &str = "\
directives:
  :category NAME   switch the active corpus category
  :limit N         cap suggestions per query (1..=20)
  :add ENTRY       insert an entry into the live index
  :bookmark        bookmark the previous query
  :help            show this text
  :quit            end the session
anything else runs as a suggestion query";

struct Session {
    category: Option<String>,
    limit: Option<usize>,
    last_query: Option<String>,
}

/// Line loop over the given reader; EOF or `:quit` ends it. Query errors are
/// printed and the session keeps going.
pub(super) fn run_session(
    app: &Typeahead,
    category: Option<String>,
    limit: Option<usize>,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let mut session = Session {
        category,
        limit,
        last_query: None,
    };

    writeln!(
        out,
        "typeahead interactive on {}; :help lists directives, :quit exits",
        session.category.as_deref().unwrap_or(app.default_category()),
    )?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(directive) = trimmed.strip_prefix(':') {
            if !apply_directive(app, &mut session, directive, &mut out)? {
                break;
            }
        } else {
            run_query(app, &mut session, trimmed, &mut out)?;
        }
    }
    Ok(())
}

fn apply_directive(
    app: &Typeahead,
    session: &mut Session,
    directive: &str,
    out: &mut impl Write,
) -> Result<bool> {
    let (name, rest) = match directive.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (directive, ""),
    };

    match name {
        "category" => {
            if rest.is_empty() {
                writeln!(out, "usage: :category NAME")?;
            } else {
                session.category = Some(rest.to_string());
                writeln!(out, "category set to {rest}")?;
            }
        }
        "limit" => match parse_limit(rest) {
            Ok(value) => {
                session.limit = Some(value);
                writeln!(out, "limit set to {value}")?;
            }
            Err(message) => writeln!(out, "{message}")?,
        },
        "add" => {
            if rest.is_empty() {
                writeln!(out, "usage: :add ENTRY")?;
            } else {
                app.insert(rest)?;
                writeln!(out, "added {rest:?}")?;
            }
        }
        "bookmark" => match session.last_query.as_deref() {
            Some(query) => match app.add_bookmark(query) {
                Ok(bookmark) => writeln!(out, "bookmarked {:?}", bookmark.query)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            None => writeln!(out, "no query to bookmark yet")?,
        },
        "help" => writeln!(out, "{HELP_TEXT}")?,
        "quit" => return Ok(false),
        other => writeln!(out, "unknown directive :{other}; :help lists directives")?,
    }
    Ok(true)
}

fn run_query(
    app: &Typeahead,
    session: &mut Session,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let request = SuggestRequest {
        query: query.to_string(),
        category: session.category.clone(),
        limit: session.limit,
    };
    match app.suggest(&request) {
        Ok(result) => {
            if result.matches.is_empty() {
                writeln!(out, "(no matches)")?;
            } else {
                for entry in &result.matches {
                    writeln!(out, "{entry}")?;
                }
            }
            session.last_query = Some(query.to_string());
        }
        Err(err) => writeln!(out, "error: {err}")?,
    }
    Ok(())
}
