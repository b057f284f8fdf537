//! HTTP client for the Create4Me backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from browser storage on every request. Server-side (SSR):
//! stubs returning a network error since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as an `ApiError`: unreachable server and timeouts
//! as `Network`, failure statuses and `success: false` envelopes as `Server`
//! with the backend's message (or the `"Request failed"` fallback), and
//! undecodable success bodies as `Decode`. Nothing is retried; callers
//! present errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Application, ApplicationStatus, AuthSession, BookmarkState, Campaign, CampaignUpdate,
    Connection, Creator, LikeState, NewCampaign, Role, UploadedImage, User,
};
use crate::util::storage::{BrowserTokenStore, TokenStore};

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder};

/// Fallback error message when a failure response carries no message of its
/// own.
pub const REQUEST_FAILED: &str = "Request failed";

/// Deadline applied to every request; exceeding it surfaces as a network
/// error. There is no retry.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 15_000;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Failure surfaced by any [`ApiClient`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server could not be reached, the request timed out, or no fetch
    /// implementation is available.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a failure status or a `success: false` body.
    #[error("{0}")]
    Server(String),
    /// A success response carried a body this client could not decode.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(not(feature = "hydrate"))]
impl ApiError {
    fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }
}

/// Single point of HTTP contact with the backend.
///
/// Holds the base URL and a token store; the stored token is re-read on
/// every request so the client never caches credentials. Stateless beyond
/// that: no response caching, no shared-state mutation.
#[derive(Clone, Debug)]
pub struct ApiClient<S: TokenStore = BrowserTokenStore> {
    base_url: String,
    tokens: S,
}

impl ApiClient {
    /// Client against the configured backend, using browser token storage.
    ///
    /// The base URL comes from the `CREATE4ME_API_URL` build-time variable,
    /// defaulting to the local development address.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(option_env!("CREATE4ME_API_URL").unwrap_or(DEFAULT_BASE_URL), BrowserTokenStore)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenStore> ApiClient<S> {
    /// Client with an explicit base URL and token store, for tests and
    /// dependency injection.
    pub fn with_parts(base_url: impl Into<String>, tokens: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, tokens }
    }

    /// The `Authorization` header value for the next request, present iff a
    /// token is currently stored.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.tokens.token().map(|token| format!("Bearer {token}"))
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "hydrate")]
    async fn send_with_deadline(&self, request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::Either;

        let outcome = futures::future::select(
            Box::pin(request.send()),
            Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS)),
        )
        .await;

        match outcome {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(((), _)) => {
                Err(ApiError::Network(format!("request timed out after {REQUEST_TIMEOUT_MS}ms")))
            }
        }
    }

    /// Request primitive: merges the bearer header when a token is stored,
    /// sends JSON, and decodes the JSON response body.
    #[cfg(feature = "hydrate")]
    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut builder = RequestBuilder::new(&url).method(method);
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }

        let request = match body {
            Some(value) => builder.json(value),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = self.send_with_deadline(request).await?;

        if !response.ok() {
            let body = response.json::<serde_json::Value>().await.ok();
            return Err(server_error(body.as_ref()));
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    // -------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------

    /// Create an account via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Fails if the email is taken or the request cannot complete.
    pub async fn sign_up(&self, email: &str, password: &str, role: Role) -> Result<AuthSession, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password, "role": role });
            let resp: AuthResponse = self.send_json(Method::POST, "/auth/signup", Some(&payload)).await?;
            auth_session(resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, role);
            Err(ApiError::unavailable())
        }
    }

    /// Authenticate via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Fails on wrong credentials or an unreachable server.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp: AuthResponse = self.send_json(Method::POST, "/auth/login", Some(&payload)).await?;
            auth_session(resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::unavailable())
        }
    }

    /// Fetch the user the stored token identifies via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Fails when the token is missing, expired, or revoked.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: UserResponse = self.send_json(Method::GET, "/auth/me", None).await?;
            require(resp.success, resp.user, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Campaigns
    // -------------------------------------------------------------------

    /// List all campaigns via `GET /campaigns`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: CampaignsResponse = self.send_json(Method::GET, "/campaigns", None).await?;
            require_success(resp.success, resp.campaigns, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// Fetch one campaign via `GET /campaigns/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the campaign does not exist or the request cannot complete.
    pub async fn campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: CampaignResponse = self.send_json(Method::GET, &campaign_endpoint(id), None).await?;
            require(resp.success, resp.campaign, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    /// Publish a campaign via `POST /campaigns`.
    ///
    /// # Errors
    ///
    /// Fails if the caller is not a brand or the request cannot complete.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::to_value(campaign).map_err(|e| ApiError::Decode(e.to_string()))?;
            let resp: CampaignResponse = self.send_json(Method::POST, "/campaigns", Some(&payload)).await?;
            require(resp.success, resp.campaign, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = campaign;
            Err(ApiError::unavailable())
        }
    }

    /// Update a campaign via `PUT /campaigns/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the caller does not own the campaign or the request cannot
    /// complete.
    pub async fn update_campaign(&self, id: &str, update: &CampaignUpdate) -> Result<Campaign, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
            let resp: CampaignResponse =
                self.send_json(Method::PUT, &campaign_endpoint(id), Some(&payload)).await?;
            require(resp.success, resp.campaign, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
            Err(ApiError::unavailable())
        }
    }

    /// Delete a campaign via `DELETE /campaigns/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the caller does not own the campaign or the request cannot
    /// complete.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: AckResponse = self.send_json(Method::DELETE, &campaign_endpoint(id), None).await?;
            require_success(resp.success, (), resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Applications
    // -------------------------------------------------------------------

    /// Apply to a campaign via `POST /campaigns/{id}/apply`.
    ///
    /// # Errors
    ///
    /// Fails if the caller already applied or the request cannot complete.
    pub async fn apply_to_campaign(&self, id: &str, message: Option<&str>) -> Result<Application, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "message": message });
            let resp: ApplicationResponse =
                self.send_json(Method::POST, &campaign_apply_endpoint(id), Some(&payload)).await?;
            require(resp.success, resp.application, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, message);
            Err(ApiError::unavailable())
        }
    }

    /// List a campaign's applicants via `GET /campaigns/{id}/applications`.
    ///
    /// # Errors
    ///
    /// Fails if the caller does not own the campaign or the request cannot
    /// complete.
    pub async fn campaign_applications(&self, id: &str) -> Result<Vec<Application>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: ApplicationsResponse =
                self.send_json(Method::GET, &campaign_applications_endpoint(id), None).await?;
            require_success(resp.success, resp.applications, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    /// Accept or reject an application via `PUT /applications/{id}/status`.
    ///
    /// # Errors
    ///
    /// Fails if the caller does not own the campaign or the request cannot
    /// complete.
    pub async fn set_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "status": status });
            let resp: ApplicationResponse =
                self.send_json(Method::PUT, &application_status_endpoint(id), Some(&payload)).await?;
            require(resp.success, resp.application, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Engagement
    // -------------------------------------------------------------------

    /// Toggle the caller's like on a campaign via `POST /campaigns/{id}/like`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn toggle_campaign_like(&self, id: &str) -> Result<LikeState, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: LikeResponse = self.send_json(Method::POST, &campaign_like_endpoint(id), None).await?;
            like_state(resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    /// Toggle the caller's bookmark on a campaign via
    /// `POST /campaigns/{id}/bookmark`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn toggle_campaign_bookmark(&self, id: &str) -> Result<BookmarkState, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: BookmarkResponse =
                self.send_json(Method::POST, &campaign_bookmark_endpoint(id), None).await?;
            require(resp.success, resp.bookmarked.map(|bookmarked| BookmarkState { bookmarked }), resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    /// Toggle the caller's like on a creator via `POST /creators/{id}/like`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn toggle_creator_like(&self, id: &str) -> Result<LikeState, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: LikeResponse = self.send_json(Method::POST, &creator_like_endpoint(id), None).await?;
            like_state(resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Creators
    // -------------------------------------------------------------------

    /// List creators via `GET /creators`, optionally filtered by a search
    /// term.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn creators(&self, search: Option<&str>) -> Result<Vec<Creator>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: CreatorsResponse = self.send_json(Method::GET, &creators_endpoint(search), None).await?;
            require_success(resp.success, resp.creators, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = search;
            Err(ApiError::unavailable())
        }
    }

    /// Fetch one creator profile via `GET /creators/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the profile does not exist or the request cannot complete.
    pub async fn creator(&self, id: &str) -> Result<Creator, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: CreatorResponse = self.send_json(Method::GET, &creator_endpoint(id), None).await?;
            require(resp.success, resp.creator, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Connections
    // -------------------------------------------------------------------

    /// List the caller's connections via `GET /connections`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn connections(&self) -> Result<Vec<Connection>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: ConnectionsResponse = self.send_json(Method::GET, "/connections", None).await?;
            require_success(resp.success, resp.connections, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// Request a connection to another user via `POST /connections/{user_id}`.
    ///
    /// # Errors
    ///
    /// Fails if a connection already exists or the request cannot complete.
    pub async fn request_connection(&self, user_id: &str) -> Result<Connection, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: ConnectionResponse =
                self.send_json(Method::POST, &connection_endpoint(user_id), None).await?;
            require(resp.success, resp.connection, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::unavailable())
        }
    }

    /// Accept or reject a pending connection via `PUT /connections/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the caller is not the recipient or the request cannot
    /// complete.
    pub async fn respond_to_connection(&self, id: &str, accept: bool) -> Result<Connection, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "status": connection_answer(accept) });
            let resp: ConnectionResponse =
                self.send_json(Method::PUT, &connection_endpoint(id), Some(&payload)).await?;
            require(resp.success, resp.connection, resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, accept);
            Err(ApiError::unavailable())
        }
    }

    /// Remove a connection via `DELETE /connections/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot complete.
    pub async fn remove_connection(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp: AckResponse = self.send_json(Method::DELETE, &connection_endpoint(id), None).await?;
            require_success(resp.success, (), resp.message, resp.error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::unavailable())
        }
    }

    // -------------------------------------------------------------------
    // Uploads
    // -------------------------------------------------------------------

    /// Upload an image via `POST /uploads` as multipart form data.
    ///
    /// Browser-only: `web_sys::File` has no native counterpart.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be attached or the request cannot complete.
    #[cfg(feature = "hydrate")]
    pub async fn upload_image(&self, file: &web_sys::File) -> Result<UploadedImage, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;

        let mut builder = RequestBuilder::new(&self.url("/uploads")).method(Method::POST);
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;

        let response = self.send_with_deadline(request).await?;
        if !response.ok() {
            let body = response.json::<serde_json::Value>().await.ok();
            return Err(server_error(body.as_ref()));
        }
        let resp: UploadResponse =
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        require(resp.success, resp.image, resp.message, resp.error)
    }
}

// ---------------------------------------------------------------------------
// Endpoint paths
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "hydrate"))]
fn campaign_endpoint(id: &str) -> String {
    format!("/campaigns/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_apply_endpoint(id: &str) -> String {
    format!("/campaigns/{id}/apply")
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_applications_endpoint(id: &str) -> String {
    format!("/campaigns/{id}/applications")
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_like_endpoint(id: &str) -> String {
    format!("/campaigns/{id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_bookmark_endpoint(id: &str) -> String {
    format!("/campaigns/{id}/bookmark")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_status_endpoint(id: &str) -> String {
    format!("/applications/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn creator_endpoint(id: &str) -> String {
    format!("/creators/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn creator_like_endpoint(id: &str) -> String {
    format!("/creators/{id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn connection_endpoint(id: &str) -> String {
    format!("/connections/{id}")
}

/// `GET /creators` path with the search term percent-encoded into the query
/// string; blank terms are omitted entirely.
#[cfg(any(test, feature = "hydrate"))]
fn creators_endpoint(search: Option<&str>) -> String {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => format!("/creators?search={}", encode_query(term)),
        None => "/creators".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_query(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn connection_answer(accept: bool) -> &'static str {
    if accept { "accepted" } else { "rejected" }
}

// ---------------------------------------------------------------------------
// Envelope handling
// ---------------------------------------------------------------------------

/// Pick the server-supplied message out of a failure envelope, falling back
/// to [`REQUEST_FAILED`].
#[cfg(any(test, feature = "hydrate"))]
fn envelope_message(message: Option<String>, error: Option<String>) -> String {
    message
        .or(error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REQUEST_FAILED.to_owned())
}

/// Error for a failure HTTP status, preferring the body's `message` then
/// `error` string.
#[cfg(any(test, feature = "hydrate"))]
fn server_error(body: Option<&serde_json::Value>) -> ApiError {
    let from_body = |key: &str| {
        body.and_then(|value| value.get(key))
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned)
    };
    ApiError::Server(envelope_message(from_body("message"), from_body("error")))
}

#[cfg(any(test, feature = "hydrate"))]
fn require<T>(success: bool, payload: Option<T>, message: Option<String>, error: Option<String>) -> Result<T, ApiError> {
    if !success {
        return Err(ApiError::Server(envelope_message(message, error)));
    }
    payload.ok_or_else(|| ApiError::Decode("response payload missing".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn require_success<T>(success: bool, value: T, message: Option<String>, error: Option<String>) -> Result<T, ApiError> {
    if success {
        Ok(value)
    } else {
        Err(ApiError::Server(envelope_message(message, error)))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_session(resp: AuthResponse) -> Result<AuthSession, ApiError> {
    if !resp.success {
        return Err(ApiError::Server(envelope_message(resp.message, resp.error)));
    }
    match (resp.token, resp.user) {
        (Some(token), Some(user)) => Ok(AuthSession { token, user }),
        _ => Err(ApiError::Decode("auth response missing token or user".to_owned())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn like_state(resp: LikeResponse) -> Result<LikeState, ApiError> {
    if !resp.success {
        return Err(ApiError::Server(envelope_message(resp.message, resp.error)));
    }
    match resp.liked {
        Some(liked) => Ok(LikeState { liked, likes: resp.likes.unwrap_or_default() }),
        None => Err(ApiError::Decode("response payload missing".to_owned())),
    }
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    success: bool,
    token: Option<String>,
    user: Option<User>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct UserResponse {
    success: bool,
    user: Option<User>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct CampaignsResponse {
    success: bool,
    #[serde(default)]
    campaigns: Vec<Campaign>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct CampaignResponse {
    success: bool,
    campaign: Option<Campaign>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ApplicationsResponse {
    success: bool,
    #[serde(default)]
    applications: Vec<Application>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ApplicationResponse {
    success: bool,
    application: Option<Application>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct LikeResponse {
    success: bool,
    liked: Option<bool>,
    likes: Option<i64>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct BookmarkResponse {
    success: bool,
    bookmarked: Option<bool>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct CreatorsResponse {
    success: bool,
    #[serde(default)]
    creators: Vec<Creator>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct CreatorResponse {
    success: bool,
    creator: Option<Creator>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ConnectionsResponse {
    success: bool,
    #[serde(default)]
    connections: Vec<Connection>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ConnectionResponse {
    success: bool,
    connection: Option<Connection>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct AckResponse {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct UploadResponse {
    success: bool,
    image: Option<UploadedImage>,
    message: Option<String>,
    error: Option<String>,
}
