//! Domain types and pure rules for the project tracker.
//!
//! Nothing in this crate touches the database or the network: the API
//! server validates requests with it and the client filters its cached
//! view with it.

pub mod error;
pub mod listing;
pub mod project;
pub mod types;
