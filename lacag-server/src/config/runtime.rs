//! Runtime configuration re-exports.
//!
//! The actual config types are defined in `lacag-core::config`.
//! This module re-exports them for convenience.

pub use lacag_core::config::{
    AdminConfig, AdminSecretError, ResolverConfig, ServerConfig, SharedConfig,
};
