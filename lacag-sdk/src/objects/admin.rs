//! Admin API request and response types.

use serde::{Deserialize, Serialize};

use super::wallet::WalletConfig;

/// Body of `PATCH /api/v1/admin/wallet-types/{key}`.
pub use super::wallet::WalletTypePatch as UpdateWalletTypeRequest;

/// Response of the mutating admin endpoints (`reset`, `import`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfigResponse {
    /// Store version after the operation.
    pub version: u64,
    pub config: WalletConfig,
}
