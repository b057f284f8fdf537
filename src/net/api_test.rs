use super::*;
use crate::util::storage::MemoryTokenStore;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: None,
        role: Role::Creator,
        created_at: None,
    }
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_present_iff_token_stored() {
    let client = ApiClient::with_parts("http://api.test", MemoryTokenStore::default());
    assert_eq!(client.bearer(), None);

    let client = ApiClient::with_parts("http://api.test", MemoryTokenStore::with_token("t1"));
    assert_eq!(client.bearer(), Some("Bearer t1".to_owned()));
}

#[test]
fn bearer_rereads_store_on_every_call() {
    let tokens = MemoryTokenStore::default();
    let client = ApiClient::with_parts("http://api.test", tokens.clone());
    assert_eq!(client.bearer(), None);
    tokens.store("t2");
    assert_eq!(client.bearer(), Some("Bearer t2".to_owned()));
    tokens.clear();
    assert_eq!(client.bearer(), None);
}

// =============================================================
// URL building
// =============================================================

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::with_parts("http://api.test/api", MemoryTokenStore::default());
    assert_eq!(client.url("/campaigns"), "http://api.test/api/campaigns");
}

#[test]
fn with_parts_trims_trailing_slashes() {
    let client = ApiClient::with_parts("http://api.test/api/", MemoryTokenStore::default());
    assert_eq!(client.url("/auth/me"), "http://api.test/api/auth/me");
}

#[test]
fn campaign_endpoints_format_expected_paths() {
    assert_eq!(campaign_endpoint("c1"), "/campaigns/c1");
    assert_eq!(campaign_apply_endpoint("c1"), "/campaigns/c1/apply");
    assert_eq!(campaign_applications_endpoint("c1"), "/campaigns/c1/applications");
    assert_eq!(campaign_like_endpoint("c1"), "/campaigns/c1/like");
    assert_eq!(campaign_bookmark_endpoint("c1"), "/campaigns/c1/bookmark");
}

#[test]
fn application_and_creator_endpoints_format_expected_paths() {
    assert_eq!(application_status_endpoint("a1"), "/applications/a1/status");
    assert_eq!(creator_endpoint("cr1"), "/creators/cr1");
    assert_eq!(creator_like_endpoint("cr1"), "/creators/cr1/like");
    assert_eq!(connection_endpoint("n1"), "/connections/n1");
}

#[test]
fn creators_endpoint_encodes_search_term() {
    assert_eq!(creators_endpoint(None), "/creators");
    assert_eq!(creators_endpoint(Some("   ")), "/creators");
    assert_eq!(creators_endpoint(Some("fitness")), "/creators?search=fitness");
    assert_eq!(creators_endpoint(Some("addis ababa")), "/creators?search=addis%20ababa");
    assert_eq!(creators_endpoint(Some(" a&b ")), "/creators?search=a%26b");
}

#[test]
fn connection_answer_maps_accept_flag() {
    assert_eq!(connection_answer(true), "accepted");
    assert_eq!(connection_answer(false), "rejected");
}

// =============================================================
// Error envelope handling
// =============================================================

#[test]
fn envelope_message_prefers_message_then_error_then_fallback() {
    assert_eq!(envelope_message(Some("m1".to_owned()), Some("m2".to_owned())), "m1");
    assert_eq!(envelope_message(None, Some("m2".to_owned())), "m2");
    assert_eq!(envelope_message(None, None), REQUEST_FAILED);
}

#[test]
fn envelope_message_ignores_blank_messages() {
    assert_eq!(envelope_message(Some("   ".to_owned()), None), REQUEST_FAILED);
}

#[test]
fn server_error_reads_message_from_body() {
    let body = serde_json::json!({ "message": "Invalid credentials" });
    assert_eq!(server_error(Some(&body)), ApiError::Server("Invalid credentials".to_owned()));
}

#[test]
fn server_error_falls_back_without_a_body() {
    assert_eq!(server_error(None), ApiError::Server(REQUEST_FAILED.to_owned()));
}

#[test]
fn require_unwraps_payload_on_success() {
    let result = require(true, Some(7), None, None);
    assert_eq!(result, Ok(7));
}

#[test]
fn require_rejects_success_without_payload() {
    let result: Result<i32, ApiError> = require(true, None, None, None);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn require_surfaces_server_message_on_failure() {
    let result: Result<i32, ApiError> =
        require(false, Some(7), Some("nope".to_owned()), None);
    assert_eq!(result, Err(ApiError::Server("nope".to_owned())));
}

#[test]
fn require_success_passes_value_through() {
    assert_eq!(require_success(true, (), None, None), Ok(()));
    assert_eq!(
        require_success(false, (), None, Some("gone".to_owned())),
        Err(ApiError::Server("gone".to_owned()))
    );
}

// =============================================================
// Auth envelope
// =============================================================

#[test]
fn auth_session_requires_token_and_user_together() {
    let resp = AuthResponse {
        success: true,
        token: Some("t1".to_owned()),
        user: Some(user()),
        message: None,
        error: None,
    };
    let session = auth_session(resp).unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.id, "u1");
}

#[test]
fn auth_session_rejects_missing_token() {
    let resp = AuthResponse { success: true, token: None, user: Some(user()), message: None, error: None };
    assert!(matches!(auth_session(resp), Err(ApiError::Decode(_))));
}

#[test]
fn auth_session_surfaces_failure_message() {
    let resp = AuthResponse {
        success: false,
        token: None,
        user: None,
        message: Some("Invalid credentials".to_owned()),
        error: None,
    };
    assert_eq!(auth_session(resp), Err(ApiError::Server("Invalid credentials".to_owned())));
}

#[test]
fn auth_response_decodes_spec_example() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "token": "t1",
        "user": { "id": "1", "email": "a@b.com", "name": null, "role": "creator", "created_at": null }
    }))
    .unwrap();
    let session = auth_session(resp).unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.role, Role::Creator);
}

// =============================================================
// Other envelopes
// =============================================================

#[test]
fn like_state_defaults_count_when_missing() {
    let resp = LikeResponse { success: true, liked: Some(true), likes: None, message: None, error: None };
    assert_eq!(like_state(resp), Ok(LikeState { liked: true, likes: 0 }));
}

#[test]
fn like_state_surfaces_failure() {
    let resp = LikeResponse { success: false, liked: None, likes: None, message: None, error: None };
    assert_eq!(like_state(resp), Err(ApiError::Server(REQUEST_FAILED.to_owned())));
}

#[test]
fn campaigns_response_defaults_to_empty_list() {
    let resp: CampaignsResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(resp.success);
    assert!(resp.campaigns.is_empty());
}

#[test]
fn bookmark_response_maps_to_state() {
    let resp: BookmarkResponse =
        serde_json::from_value(serde_json::json!({ "success": true, "bookmarked": true })).unwrap();
    let state = require(resp.success, resp.bookmarked.map(|bookmarked| BookmarkState { bookmarked }), resp.message, resp.error);
    assert_eq!(state, Ok(BookmarkState { bookmarked: true }));
}

#[test]
fn upload_response_decodes_image_payload() {
    let resp: UploadResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "image": { "url": "https://cdn.test/i.png", "filename": "i.png" }
    }))
    .unwrap();
    let image = require(resp.success, resp.image, resp.message, resp.error).unwrap();
    assert_eq!(image.url, "https://cdn.test/i.png");
}

#[test]
fn ack_response_decodes_failure_message() {
    let resp: AckResponse = serde_json::from_value(serde_json::json!({
        "success": false,
        "message": "Not authorized"
    }))
    .unwrap();
    assert_eq!(
        require_success(resp.success, (), resp.message, resp.error),
        Err(ApiError::Server("Not authorized".to_owned()))
    );
}

#[test]
fn remaining_envelopes_decode_minimal_bodies() {
    let users: UserResponse = serde_json::from_value(serde_json::json!({ "success": false })).unwrap();
    assert!(!users.success);

    let one: CampaignResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(one.campaign.is_none());

    let apps: ApplicationsResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(apps.applications.is_empty());

    let app: ApplicationResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(app.application.is_none());

    let creators: CreatorsResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(creators.creators.is_empty());

    let creator: CreatorResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(creator.creator.is_none());

    let conns: ConnectionsResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(conns.connections.is_empty());

    let conn: ConnectionResponse = serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
    assert!(conn.connection.is_none());
}
