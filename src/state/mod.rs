//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `campaigns`, `creators`,
//! `connections`) so individual components can depend on small focused
//! models. Each state struct is plain data held in a `RwSignal` provided
//! via context by the application root.

pub mod campaigns;
pub mod connections;
pub mod creators;
pub mod session;
