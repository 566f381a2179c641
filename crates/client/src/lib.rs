//! Client for the project tracker API.
//!
//! [`ProjectClient`] wraps the HTTP endpoints and decodes the response
//! envelope. [`ProjectBoard`] keeps a non-authoritative copy of the project
//! list, reloads it in full after every mutation, and offers the filter,
//! summary, and overdue views a UI renders from it.

pub mod api;
pub mod board;
pub mod error;
pub mod model;

pub use api::ProjectClient;
pub use board::{Confirm, DeleteOutcome, ProjectBoard};
pub use error::ClientError;
