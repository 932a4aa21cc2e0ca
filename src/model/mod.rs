//! Data transfer objects shared with API clients.

pub mod api;
pub mod user;
