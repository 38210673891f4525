//! Error types and categorization.
//!
//! This module defines the error taxonomy surfaced by the resolver and the
//! initialization errors raised while setting up the logger and HTTP client.

mod categorization;
mod types;

pub(crate) use categorization::categorize_reqwest_error;
pub use types::{InitializationError, ResolveError};
