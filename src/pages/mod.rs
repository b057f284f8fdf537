//! Routed pages. Each page is thin: state lives in `crate::state`, network
//! access in `crate::net`.

pub mod creators;
pub mod dashboard;
pub mod login;
