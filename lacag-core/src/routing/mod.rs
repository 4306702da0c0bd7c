//! Wallet routing: which mobile-money wallet a phone number belongs to.
//!
//! - [`registry`] holds the ordered wallet types.
//! - [`store`] is the sole mutation gateway and persists every change.
//! - [`resolver`] classifies phone numbers by prefix.
//! - [`defaults`] is the built-in snapshot.

pub mod defaults;
pub mod registry;
pub mod resolver;
pub mod store;

pub use defaults::default_config;
pub use registry::WalletTypeRegistry;
pub use resolver::PrefixResolver;
pub use store::{ConfigWatcher, LoadSource, WalletRoutingStore};
