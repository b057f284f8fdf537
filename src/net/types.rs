//! Wire DTOs for the Create4Me backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON documents verbatim; the client does
//! not cache, re-key, or transform them beyond typed decoding. Closed string
//! enums (role, application/connection status) decode from their lowercase
//! wire spelling.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account classification used for authorization checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Generic account with no marketplace side.
    User,
    /// Brand running campaigns.
    Brand,
    /// Content creator applying to campaigns.
    Creator,
}

impl Role {
    /// Lowercase wire spelling (`"brand"`, `"creator"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Brand => "brand",
            Self::Creator => "creator",
        }
    }
}

/// An authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name, unset until the user completes onboarding.
    pub name: Option<String>,
    /// Account role.
    pub role: Role,
    /// ISO 8601 creation timestamp, if the backend includes it.
    pub created_at: Option<String>,
}

/// A successfully established session: the bearer token plus the user it
/// identifies. Built from a sign-in/sign-up response; both halves are always
/// present together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    /// Opaque bearer token to persist and attach to later requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// A marketing campaign published by a brand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique campaign identifier.
    pub id: String,
    /// Owning brand's user identifier.
    pub brand_id: String,
    /// Campaign headline.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Content category (e.g. `"fashion"`, `"tech"`), if set.
    pub category: Option<String>,
    /// Budget in birr, if disclosed.
    pub budget: Option<f64>,
    /// Free-form creator requirements, if set.
    pub requirements: Option<String>,
    /// Lifecycle status string (e.g. `"open"`, `"closed"`), if set.
    pub status: Option<String>,
    /// Number of likes.
    #[serde(default)]
    pub likes: i64,
    /// ISO 8601 creation timestamp, if the backend includes it.
    pub created_at: Option<String>,
}

/// Payload for creating a campaign.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCampaign {
    /// Campaign headline.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Content category, if chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Budget in birr, if disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Free-form creator requirements, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
}

/// Partial update for an existing campaign; unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampaignUpdate {
    /// New headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// New requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// New lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Review state of a creator's application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Awaiting the brand's decision.
    Pending,
    /// Accepted by the brand.
    Accepted,
    /// Rejected by the brand.
    Rejected,
}

impl ApplicationStatus {
    /// Lowercase wire spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A creator's application to a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: String,
    /// Campaign applied to.
    pub campaign_id: String,
    /// Applying creator's user identifier.
    pub creator_id: String,
    /// Optional pitch message from the creator.
    pub message: Option<String>,
    /// Current review state.
    pub status: ApplicationStatus,
    /// ISO 8601 creation timestamp, if the backend includes it.
    pub created_at: Option<String>,
}

/// A creator profile as listed in discovery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    /// Unique creator profile identifier.
    pub id: String,
    /// Backing user account identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Short biography, if set.
    pub bio: Option<String>,
    /// Content niche (e.g. `"lifestyle"`), if set.
    pub niche: Option<String>,
    /// Follower count across platforms, if reported.
    pub followers: Option<i64>,
    /// Platforms the creator publishes on.
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Number of likes.
    #[serde(default)]
    pub likes: i64,
}

/// Acceptance state of a connection between two users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Requested, awaiting the recipient's answer.
    Pending,
    /// Accepted by the recipient.
    Accepted,
    /// Rejected by the recipient.
    Rejected,
}

/// A networking connection between two users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection identifier.
    pub id: String,
    /// User who sent the request.
    pub requester_id: String,
    /// User who received the request.
    pub recipient_id: String,
    /// Current acceptance state.
    pub status: ConnectionStatus,
    /// ISO 8601 creation timestamp, if the backend includes it.
    pub created_at: Option<String>,
}

/// Like toggle outcome for a campaign or creator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    /// Whether the current user now likes the target.
    pub liked: bool,
    /// Total like count after the toggle.
    #[serde(default)]
    pub likes: i64,
}

/// Bookmark toggle outcome for a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkState {
    /// Whether the current user now bookmarks the target.
    pub bookmarked: bool,
}

/// A stored image as returned by the upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public URL of the stored image.
    pub url: String,
    /// Server-side filename, if reported.
    pub filename: Option<String>,
}
