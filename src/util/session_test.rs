use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryStore::default();
    assert!(store.load().is_none());

    store.save("tok-1");
    assert_eq!(store.load().as_deref(), Some("tok-1"));

    store.save("tok-2");
    assert_eq!(store.load().as_deref(), Some("tok-2"));

    store.clear();
    assert!(store.load().is_none());
}

// =============================================================
// Session over an injected store
// =============================================================

#[test]
fn session_begin_persists_and_token_reads_back() {
    let session = Session::new(MemoryStore::default());
    assert!(session.token().is_none());

    session.begin("opaque-token");
    assert_eq!(session.token().as_deref(), Some("opaque-token"));
}

#[test]
fn session_end_leaves_persisted_token_in_place() {
    // Documents the known gap: logout drops only in-memory state, so a
    // later session over the same store still finds the token.
    let session = Session::new(MemoryStore::default());
    session.begin("opaque-token");

    session.end();
    assert_eq!(session.token().as_deref(), Some("opaque-token"));
}

// =============================================================
// BrowserStore off-wasm
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_without_a_browser() {
    let store = BrowserStore;
    store.save("tok");
    assert!(store.load().is_none());
    store.clear();
}
