use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.token(), None);
}

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryTokenStore::default();
    store.store("t1");
    assert_eq!(store.token(), Some("t1".to_owned()));
}

#[test]
fn memory_store_overwrites_previous_token() {
    let store = MemoryTokenStore::with_token("t1");
    store.store("t2");
    assert_eq!(store.token(), Some("t2".to_owned()));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("t1");
    store.clear();
    assert_eq!(store.token(), None);
}

#[test]
fn memory_store_clones_share_backing_cell() {
    let store = MemoryTokenStore::default();
    let alias = store.clone();
    store.store("t1");
    assert_eq!(alias.token(), Some("t1".to_owned()));
}

// =============================================================
// BrowserTokenStore off-browser
// =============================================================

#[test]
fn browser_store_is_inert_without_a_window() {
    let store = BrowserTokenStore;
    store.store("t1");
    assert_eq!(store.token(), None);
    store.clear();
    assert_eq!(store.token(), None);
}

#[test]
fn name_prompt_not_skipped_without_a_window() {
    assert!(!name_prompt_skipped());
}
