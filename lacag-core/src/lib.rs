#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routing;
pub mod storage;

pub use error::StoreError;
