use super::*;
use crate::net::types::ImageRef;

fn record(id: &str, name: &str) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        social_media_handle: format!("{name}_gram"),
        images: vec![ImageRef { url: format!("https://cdn.example.com/{id}.png") }],
    }
}

// =============================================================
// Defaults and login transitions
// =============================================================

#[test]
fn default_is_unauthenticated_and_empty() {
    let state = AdminState::default();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(state.error.is_empty());
    assert!(state.users.is_empty());
}

#[test]
fn login_succeeded_enters_authenticated_and_clears_error() {
    let mut state = AdminState::default();
    state.login_failed();
    assert!(!state.error.is_empty());

    state.login_succeeded();
    assert_eq!(state.phase, Phase::Authenticated);
    assert!(state.error.is_empty());
}

#[test]
fn login_failed_stays_unauthenticated_with_visible_error() {
    let mut state = AdminState::default();
    state.login_failed();

    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(!state.error.is_empty());
}

// =============================================================
// List hydration and pushed appends
// =============================================================

#[test]
fn hydrate_users_replaces_snapshot() {
    let mut state = AdminState::default();
    state.login_succeeded();
    state.hydrate_users(vec![record("1", "alice"), record("2", "bob")]);

    assert_eq!(state.users.len(), 2);
    assert_eq!(state.users[0].id, "1");
}

#[test]
fn push_user_appends_one_record_preserving_order() {
    let mut state = AdminState::default();
    state.login_succeeded();
    state.hydrate_users(vec![record("1", "alice")]);

    state.push_user(record("2", "bob"));
    state.push_user(record("3", "carol"));

    let ids: Vec<&str> = state.users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn push_user_does_not_deduplicate() {
    let mut state = AdminState::default();
    state.hydrate_users(vec![record("1", "alice")]);
    state.push_user(record("1", "alice"));

    assert_eq!(state.users.len(), 2);
}

#[test]
fn push_user_works_before_hydration() {
    // A feed message can land before the snapshot fetch resolves; the
    // record is kept and the later hydration replaces it wholesale.
    let mut state = AdminState::default();
    state.login_succeeded();
    state.push_user(record("9", "zed"));

    assert_eq!(state.users.len(), 1);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_list_and_returns_to_unauthenticated() {
    let mut state = AdminState::default();
    state.login_succeeded();
    state.hydrate_users(vec![record("1", "alice")]);
    state.push_user(record("2", "bob"));

    state.logout();

    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(state.users.is_empty());
    assert!(state.error.is_empty());
}
