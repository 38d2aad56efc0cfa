use super::*;

fn filled() -> FormState {
    FormState {
        name: "Alice".to_owned(),
        social_media_handle: "alice_gram".to_owned(),
        previews: vec!["blob:a".to_owned(), "blob:b".to_owned()],
        submitting: false,
        message: String::new(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_empty_and_idle() {
    let state = FormState::default();
    assert!(state.name.is_empty());
    assert!(state.social_media_handle.is_empty());
    assert!(state.previews.is_empty());
    assert!(!state.submitting);
    assert!(state.message.is_empty());
}

// =============================================================
// Cumulative selection
// =============================================================

#[test]
fn append_previews_accumulates_across_batches() {
    let mut state = FormState::default();
    state.append_previews(vec!["blob:1".to_owned(), "blob:2".to_owned()]);
    state.append_previews(vec!["blob:3".to_owned()]);
    state.append_previews(Vec::new());
    state.append_previews(vec!["blob:4".to_owned(), "blob:5".to_owned()]);

    assert_eq!(state.previews, vec!["blob:1", "blob:2", "blob:3", "blob:4", "blob:5"]);
}

#[test]
fn append_previews_keeps_duplicates() {
    let mut state = FormState::default();
    state.append_previews(vec!["blob:same".to_owned()]);
    state.append_previews(vec!["blob:same".to_owned()]);

    assert_eq!(state.previews.len(), 2);
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn begin_submit_clears_stale_message() {
    let mut state = filled();
    state.message = "Failed to submit form. Please try again.".to_owned();

    assert!(state.begin_submit());
    assert!(state.submitting);
    assert!(state.message.is_empty());
}

#[test]
fn begin_submit_rejects_reentry_while_in_flight() {
    let mut state = filled();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    assert!(state.submitting);
}

// =============================================================
// Success / failure application
// =============================================================

#[test]
fn complete_resets_fields_and_swaps_previews_for_server_urls() {
    let mut state = filled();
    state.begin_submit();

    state.complete(vec![
        "https://cdn.example.com/a.png".to_owned(),
        "https://cdn.example.com/b.png".to_owned(),
    ]);

    assert!(state.name.is_empty());
    assert!(state.social_media_handle.is_empty());
    assert_eq!(
        state.previews,
        vec!["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"]
    );
    assert!(!state.submitting);
    assert!(!state.message.is_empty());
}

#[test]
fn fail_preserves_input_and_sets_message() {
    let mut state = filled();
    state.begin_submit();

    state.fail("Failed to submit form. Please try again.");

    assert_eq!(state.name, "Alice");
    assert_eq!(state.social_media_handle, "alice_gram");
    assert_eq!(state.previews, vec!["blob:a", "blob:b"]);
    assert!(!state.submitting);
    assert_eq!(state.message, "Failed to submit form. Please try again.");
}

#[test]
fn failed_attempt_can_be_retried() {
    let mut state = filled();
    state.begin_submit();
    state.fail("Failed to upload images.");

    assert!(state.begin_submit());
}
