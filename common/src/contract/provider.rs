use anyhow::Result;

use crate::crypto::Hash;

/// Read access to persisted contract state
///
/// Implemented by the chain storage and consumed by executors, which layer a
/// [`ContractCache`](super::ContractCache) on top for the writes of a call.
pub trait ContractProvider {
    /// Load the value stored under `key` for `contract`, if any
    fn load_data(&self, contract: &Hash, key: &[u8]) -> Result<Option<Vec<u8>>>;
}
