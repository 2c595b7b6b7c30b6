use std::process::Command;
use std::{env, fs, path::PathBuf};

use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_typeahead-cli") {
        return PathBuf::from(path);
    }
    if let Ok(path) = env::var("CARGO_BIN_EXE_typeahead_cli") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "typeahead-cli.exe"
    } else {
        "typeahead-cli"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "typeahead-cli binary not found at {}",
        fallback.display()
    );
    fallback
}

#[test]
fn suggest_process_contract_prints_matches_one_per_line() {
    // Pseudocode:
    // Given a root with a movies corpus
    // When running `typeahead-cli suggest du`
    // Then process exits with success and prints each match on its own line.
    let root = tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("corpus")).expect("corpus dir");
    fs::write(
        root.path().join("corpus").join("movies.txt"),
        "dune\ndune part two\ndrive\n",
    )
    .expect("corpus file");

    let output = Command::new(cli_bin_path())
        .args([
            "--root",
            root.path().to_str().expect("root path"),
            "suggest",
            "du",
        ])
        .output()
        .expect("run suggest");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["dune", "duneparttwo"]);
}

#[test]
fn suggest_unknown_category_process_contract_returns_non_zero() {
    // Pseudocode:
    // Given a fresh root with no corpus files
    // When running `typeahead-cli suggest du --category books`
    // Then process exits non-zero and names the missing corpus file.
    let root = tempdir().expect("tempdir");
    let output = Command::new(cli_bin_path())
        .args([
            "--root",
            root.path().to_str().expect("root path"),
            "suggest",
            "du",
            "--category",
            "books",
        ])
        .output()
        .expect("run suggest");

    assert!(
        !output.status.success(),
        "stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("corpus file for category"));
}

#[test]
fn history_list_process_contract_reflects_prior_suggest_runs() {
    // Pseudocode:
    // Given a suggest run against a fresh root
    // When running `typeahead-cli history list`
    // Then process exits with success and the JSON payload carries the query.
    let root = tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("corpus")).expect("corpus dir");
    fs::write(root.path().join("corpus").join("movies.txt"), "dune\n").expect("corpus file");

    let suggest = Command::new(cli_bin_path())
        .args([
            "--root",
            root.path().to_str().expect("root path"),
            "suggest",
            "du",
        ])
        .output()
        .expect("run suggest");
    assert!(
        suggest.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&suggest.stderr)
    );

    let output = Command::new(cli_bin_path())
        .args([
            "--root",
            root.path().to_str().expect("root path"),
            "history",
            "list",
        ])
        .output()
        .expect("run history list");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"query\": \"du\""));
    assert!(stdout.contains("\"category\": \"movies\""));
}
