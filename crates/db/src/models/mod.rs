//! Row structs read from the store.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row. Validated insert/update inputs live in `tracker_core`.

pub mod project;
