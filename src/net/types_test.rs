use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Brand).unwrap(), "\"brand\"");
    assert_eq!(serde_json::to_string(&Role::Creator).unwrap(), "\"creator\"");
}

#[test]
fn role_deserializes_from_wire_spelling() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_as_str_matches_wire_spelling() {
    for role in [Role::Admin, Role::User, Role::Brand, Role::Creator] {
        assert_eq!(serde_json::to_string(&role).unwrap(), format!("\"{}\"", role.as_str()));
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_without_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "name": null,
        "role": "creator",
        "created_at": null
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Creator);
    assert!(user.name.is_none());
}

// =============================================================
// Campaign
// =============================================================

#[test]
fn campaign_likes_default_to_zero() {
    let campaign: Campaign = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "brand_id": "b1",
        "title": "Summer push",
        "description": "Short-form video",
        "category": "fashion",
        "budget": 2500.0,
        "requirements": null,
        "status": "open",
        "created_at": null
    }))
    .unwrap();
    assert_eq!(campaign.likes, 0);
    assert_eq!(campaign.budget, Some(2500.0));
}

#[test]
fn campaign_update_skips_unset_fields() {
    let update = CampaignUpdate { title: Some("New title".to_owned()), ..CampaignUpdate::default() };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "title": "New title" }));
}

#[test]
fn new_campaign_serializes_required_fields_only_when_bare() {
    let campaign = NewCampaign {
        title: "T".to_owned(),
        description: "D".to_owned(),
        category: None,
        budget: None,
        requirements: None,
    };
    let json = serde_json::to_value(&campaign).unwrap();
    assert_eq!(json, serde_json::json!({ "title": "T", "description": "D" }));
}

// =============================================================
// Statuses
// =============================================================

#[test]
fn application_status_round_trips() {
    for status in [ApplicationStatus::Pending, ApplicationStatus::Accepted, ApplicationStatus::Rejected] {
        let wire = serde_json::to_string(&status).unwrap();
        assert_eq!(wire, format!("\"{}\"", status.as_str()));
        let back: ApplicationStatus = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn connection_status_deserializes_lowercase() {
    let status: ConnectionStatus = serde_json::from_str("\"accepted\"").unwrap();
    assert_eq!(status, ConnectionStatus::Accepted);
}

// =============================================================
// Creator
// =============================================================

#[test]
fn creator_platforms_default_to_empty() {
    let creator: Creator = serde_json::from_value(serde_json::json!({
        "id": "cr1",
        "user_id": "u1",
        "name": "Hana",
        "bio": null,
        "niche": "lifestyle",
        "followers": 12000,
        "avatar_url": null
    }))
    .unwrap();
    assert!(creator.platforms.is_empty());
    assert_eq!(creator.likes, 0);
}
