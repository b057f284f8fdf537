//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP call and the bearer-header/error conventions;
//! `types` defines the wire DTOs shared with the backend.

pub mod api;
pub mod types;
