use super::*;

fn campaign(id: &str, title: &str) -> Campaign {
    Campaign {
        id: id.to_owned(),
        brand_id: "b1".to_owned(),
        title: title.to_owned(),
        description: "d".to_owned(),
        category: None,
        budget: None,
        requirements: None,
        status: None,
        likes: 0,
        created_at: None,
    }
}

#[test]
fn campaigns_state_defaults() {
    let s = CampaignsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn begin_loading_clears_previous_error() {
    let mut s = CampaignsState::default();
    s.set_failed("boom".to_owned());
    s.begin_loading();
    assert!(s.loading);
    assert!(s.error.is_none());
}

#[test]
fn set_loaded_replaces_items_and_clears_flags() {
    let mut s = CampaignsState::default();
    s.begin_loading();
    s.set_loaded(vec![campaign("c1", "A")]);
    assert_eq!(s.items.len(), 1);
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn set_failed_keeps_existing_items() {
    let mut s = CampaignsState::default();
    s.set_loaded(vec![campaign("c1", "A")]);
    s.set_failed("offline".to_owned());
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("offline"));
}

#[test]
fn upsert_prepends_new_campaigns() {
    let mut s = CampaignsState::default();
    s.set_loaded(vec![campaign("c1", "A")]);
    s.upsert(campaign("c2", "B"));
    assert_eq!(s.items[0].id, "c2");
    assert_eq!(s.items.len(), 2);
}

#[test]
fn upsert_replaces_existing_campaign_in_place() {
    let mut s = CampaignsState::default();
    s.set_loaded(vec![campaign("c1", "A"), campaign("c2", "B")]);
    s.upsert(campaign("c1", "A2"));
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].title, "A2");
}

#[test]
fn remove_drops_only_the_matching_campaign() {
    let mut s = CampaignsState::default();
    s.set_loaded(vec![campaign("c1", "A"), campaign("c2", "B")]);
    s.remove("c1");
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.items[0].id, "c2");
}

#[test]
fn set_likes_updates_matching_campaign() {
    let mut s = CampaignsState::default();
    s.set_loaded(vec![campaign("c1", "A")]);
    s.set_likes("c1", 5);
    assert_eq!(s.items[0].likes, 5);
    s.set_likes("missing", 9);
    assert_eq!(s.items[0].likes, 5);
}
