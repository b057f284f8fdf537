use super::*;

fn creator(id: &str) -> Creator {
    Creator {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        name: "Hana".to_owned(),
        bio: None,
        niche: None,
        followers: None,
        platforms: Vec::new(),
        avatar_url: None,
        likes: 0,
    }
}

#[test]
fn creators_state_defaults() {
    let s = CreatorsState::default();
    assert!(s.items.is_empty());
    assert!(s.query.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn begin_search_records_query_and_clears_error() {
    let mut s = CreatorsState::default();
    s.set_failed("boom".to_owned());
    s.begin_search(Some("fitness".to_owned()));
    assert!(s.loading);
    assert_eq!(s.query.as_deref(), Some("fitness"));
    assert!(s.error.is_none());
}

#[test]
fn set_loaded_and_set_failed_flip_flags() {
    let mut s = CreatorsState::default();
    s.begin_search(None);
    s.set_loaded(vec![creator("cr1")]);
    assert!(!s.loading);
    assert_eq!(s.items.len(), 1);

    s.set_failed("offline".to_owned());
    assert_eq!(s.error.as_deref(), Some("offline"));
    assert_eq!(s.items.len(), 1);
}

#[test]
fn set_likes_updates_matching_creator() {
    let mut s = CreatorsState::default();
    s.set_loaded(vec![creator("cr1")]);
    s.set_likes("cr1", 3);
    assert_eq!(s.items[0].likes, 3);
}

// =============================================================
// normalized_search
// =============================================================

#[test]
fn normalized_search_trims_input() {
    assert_eq!(normalized_search("  fitness  "), Some("fitness".to_owned()));
}

#[test]
fn normalized_search_rejects_blank_input() {
    assert_eq!(normalized_search(""), None);
    assert_eq!(normalized_search("   "), None);
}
