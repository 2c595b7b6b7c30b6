use tempfile::tempdir;

use crate::models::CorpusReport;

use super::*;

#[test]
fn migrate_is_idempotent_across_reopens() {
    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("state.sqlite3");

    let store = SqliteStateStore::open(&db_path).expect("open failed");
    store
        .record_search("movies", "mat", 1, "matrix", 120)
        .expect("record");
    drop(store);

    let reopened = SqliteStateStore::open(&db_path).expect("reopen failed");
    let rows = reopened.list_history(10).expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].query, "mat");
}

#[cfg(unix)]
#[test]
fn open_hardens_state_db_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("state.sqlite3");
    let store = SqliteStateStore::open(&db_path).expect("open failed");
    store
        .record_search("movies", "mat", 1, "matrix", 120)
        .expect("record");

    let mode = std::fs::metadata(&db_path)
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn history_lists_newest_first_and_clears() {
    let temp = tempdir().expect("tempdir");
    let store = SqliteStateStore::open(temp.path().join("state.sqlite3")).expect("open failed");

    store
        .record_search("movies", "first", 0, "", 10)
        .expect("record 1");
    store
        .record_search("movies", "second", 2, "a|b", 20)
        .expect("record 2");
    store
        .record_search("music", "third", 1, "abba", 30)
        .expect("record 3");

    let recent = store.list_history(2).expect("list");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].query, "third");
    assert_eq!(recent[1].query, "second");

    let all = store.list_history_oldest_first().expect("list all");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].query, "first");
    assert_eq!(all[0].result_count, 0);
    assert_eq!(all[1].results_text, "a|b");

    let cleared = store.clear_history().expect("clear");
    assert_eq!(cleared, 3);
    assert!(store.list_history(10).expect("list empty").is_empty());
}

#[test]
fn record_search_returns_the_stored_row() {
    let temp = tempdir().expect("tempdir");
    let store = SqliteStateStore::open(temp.path().join("state.sqlite3")).expect("open failed");

    let row = store
        .record_search("movies", "Mat", 2, "matrix|matrix2", 55)
        .expect("record");
    assert!(row.id > 0);
    assert_eq!(row.query, "Mat");
    assert_eq!(row.result_count, 2);
    assert!(!row.searched_at.is_empty());
}

#[test]
fn bookmarks_keep_duplicates_in_saved_order() {
    let temp = tempdir().expect("tempdir");
    let store = SqliteStateStore::open(temp.path().join("state.sqlite3")).expect("open failed");

    store.add_bookmark("dune").expect("add 1");
    store.add_bookmark("matrix").expect("add 2");
    store.add_bookmark("dune").expect("add 3");

    let saved = store.list_bookmarks().expect("list");
    assert_eq!(
        saved.iter().map(|b| b.query.as_str()).collect::<Vec<_>>(),
        vec!["dune", "matrix", "dune"]
    );

    let cleared = store.clear_bookmarks().expect("clear");
    assert_eq!(cleared, 3);
    assert!(store.list_bookmarks().expect("list empty").is_empty());
}

#[test]
fn corpus_load_upserts_by_category() {
    let temp = tempdir().expect("tempdir");
    let store = SqliteStateStore::open(temp.path().join("state.sqlite3")).expect("open failed");

    store
        .record_corpus_load(&CorpusReport {
            category: "movies".to_string(),
            path: "/corpus/movies.txt".to_string(),
            lines_read: 10,
            entries_indexed: 9,
            content_hash: "h1".to_string(),
            loaded_at: "2025-06-01T10:00:00+00:00".to_string(),
        })
        .expect("record 1");
    store
        .record_corpus_load(&CorpusReport {
            category: "movies".to_string(),
            path: "/corpus/movies.txt".to_string(),
            lines_read: 12,
            entries_indexed: 11,
            content_hash: "h2".to_string(),
            loaded_at: "2025-06-02T10:00:00+00:00".to_string(),
        })
        .expect("record 2");

    let loads = store.list_corpus_loads().expect("list");
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].content_hash, "h2");
    assert_eq!(loads[0].lines_read, 12);
    assert_eq!(loads[0].entries_indexed, 11);
}
