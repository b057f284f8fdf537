//! Campaign list state for the dashboard.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::types::Campaign;

/// Shared campaign list state.
#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CampaignsState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_loaded(&mut self, items: Vec<Campaign>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn set_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the campaign with the same id, or prepend it as new.
    pub fn upsert(&mut self, campaign: Campaign) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.id == campaign.id) {
            *existing = campaign;
        } else {
            self.items.insert(0, campaign);
        }
    }

    /// Drop the campaign with `id`, if present.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }

    /// Update one campaign's like count after a toggle response.
    pub fn set_likes(&mut self, id: &str, likes: i64) {
        if let Some(campaign) = self.items.iter_mut().find(|c| c.id == id) {
            campaign.likes = likes;
        }
    }
}

/// Fetch the campaign list into the shared state.
pub async fn load_campaigns(campaigns: RwSignal<CampaignsState>) {
    campaigns.update(CampaignsState::begin_loading);
    match ApiClient::new().campaigns().await {
        Ok(items) => campaigns.update(|c| c.set_loaded(items)),
        Err(e) => campaigns.update(|c| c.set_failed(e.to_string())),
    }
}
