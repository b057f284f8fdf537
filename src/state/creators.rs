//! Creator discovery state: the searched list plus the active search term.

#[cfg(test)]
#[path = "creators_test.rs"]
mod creators_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::types::Creator;

/// Shared creator discovery state.
#[derive(Clone, Debug, Default)]
pub struct CreatorsState {
    pub items: Vec<Creator>,
    /// Search term the current `items` were fetched with, if any.
    pub query: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CreatorsState {
    pub fn begin_search(&mut self, query: Option<String>) {
        self.query = query;
        self.loading = true;
        self.error = None;
    }

    pub fn set_loaded(&mut self, items: Vec<Creator>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn set_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Update one creator's like count after a toggle response.
    pub fn set_likes(&mut self, id: &str, likes: i64) {
        if let Some(creator) = self.items.iter_mut().find(|c| c.id == id) {
            creator.likes = likes;
        }
    }
}

/// A trimmed, non-empty search term, or `None` when the input is blank.
#[must_use]
pub fn normalized_search(raw: &str) -> Option<String> {
    let term = raw.trim();
    if term.is_empty() { None } else { Some(term.to_owned()) }
}

/// Fetch creators matching `raw` (blank means everyone) into the shared
/// state.
pub async fn load_creators(creators: RwSignal<CreatorsState>, raw: &str) {
    let query = normalized_search(raw);
    creators.update(|c| c.begin_search(query.clone()));
    match ApiClient::new().creators(query.as_deref()).await {
        Ok(items) => creators.update(|c| c.set_loaded(items)),
        Err(e) => creators.update(|c| c.set_failed(e.to_string())),
    }
}
