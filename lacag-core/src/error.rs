use compact_str::CompactString;
use lacag_sdk::ValidationError;

use crate::storage::StorageError;

/// Errors returned by [`WalletRoutingStore`](crate::routing::WalletRoutingStore) operations.
///
/// On any of these the store's in-memory state and the persisted snapshot
/// are left exactly as they were before the call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("wallet type {0} not found")]
    NotFound(CompactString),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}
