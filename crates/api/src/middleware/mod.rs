//! Router-level middleware.
//!
//! - [`envelope::envelope_bare_errors`] -- Wraps empty-bodied error responses
//!   (405, 408, ...) in the standard failure envelope.
//! - [`envelope::panic_response`] -- Panic handler for `CatchPanicLayer`.

pub mod envelope;
