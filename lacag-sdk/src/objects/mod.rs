pub mod admin;
pub mod resolve;
pub mod user;
pub mod wallet;

pub use admin::{AdminConfigResponse, UpdateWalletTypeRequest};
pub use resolve::{ResolveMode, ResolveRequest, ResolveResponse};
pub use user::WalletOption;
pub use wallet::{WalletConfig, WalletType, WalletTypePatch};
