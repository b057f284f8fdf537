//! Connection (networking) state for the current user.

#[cfg(test)]
#[path = "connections_test.rs"]
mod connections_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::types::{Connection, ConnectionStatus};

/// Shared connection list state.
#[derive(Clone, Debug, Default)]
pub struct ConnectionsState {
    pub items: Vec<Connection>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ConnectionsState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_loaded(&mut self, items: Vec<Connection>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn set_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the connection with the same id (after a request or respond
    /// call), or prepend it as new.
    pub fn upsert(&mut self, connection: Connection) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.id == connection.id) {
            *existing = connection;
        } else {
            self.items.insert(0, connection);
        }
    }

    /// Drop the connection with `id`, if present.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }

    /// Pending requests addressed to `user_id`.
    #[must_use]
    pub fn pending_incoming(&self, user_id: &str) -> usize {
        self.items
            .iter()
            .filter(|c| c.status == ConnectionStatus::Pending && c.recipient_id == user_id)
            .count()
    }

    /// Whether any connection (in any status) already links `user_id`.
    #[must_use]
    pub fn involves(&self, user_id: &str) -> bool {
        self.items
            .iter()
            .any(|c| c.requester_id == user_id || c.recipient_id == user_id)
    }
}

/// Fetch the caller's connections into the shared state.
pub async fn load_connections(connections: RwSignal<ConnectionsState>) {
    connections.update(ConnectionsState::begin_loading);
    match ApiClient::new().connections().await {
        Ok(items) => connections.update(|c| c.set_loaded(items)),
        Err(e) => connections.update(|c| c.set_failed(e.to_string())),
    }
}
