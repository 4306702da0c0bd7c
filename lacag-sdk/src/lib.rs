//! Shared types for Lacag, the wallet routing service.
//!
//! Holds the wire/persistence objects, the prefix grammar and phone
//! normalization used by both the server and its callers. The HTTP clients
//! live behind the `client` feature.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod objects;
pub mod phone;
pub mod prefix;

pub use error::ValidationError;
pub use prefix::{Prefix, PrefixError, is_valid_prefix};

/// Header name for admin API authentication (plaintext secret).
pub const ADMIN_AUTH_HEADER: &str = "Lacag-Admin-Authorization";
