//! ipcheck library: public IP lookup with provider fallback
//!
//! This library resolves the machine's public IP address and associated
//! geolocation metadata. It queries a full-featured geolocation provider first
//! and, when that fails for any reason, falls back to a minimal IP-only
//! provider. The result is a flat [`IpInfo`] record in which unknown textual
//! fields are empty strings and unknown coordinates are absent (never NaN).
//!
//! # Example
//!
//! ```no_run
//! use ipcheck::initialization::init_client;
//! use ipcheck::{Config, IpResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let resolver = IpResolver::new(client, &config)?;
//!
//! let info = resolver.resolve().await?;
//! println!("Public IP: {}", info.ip);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod display;
mod error_handling;
pub mod initialization;
mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ResolveError};
pub use resolver::{IpInfo, IpResolver};
