/// Native contract integration module.
///
/// This module provides the adapter layer between the chain's contract
/// storage and contracts compiled into the node.
///
/// # Architecture
///
/// ```text
/// LocalChain
///     ↓
/// ContractExecutor trait (common interface)
///     ↓
/// NativeExecutor (this module)
///     ↓
/// NativeStorageAdapter (host functions)
///     ↓
/// NativeContract entrypoint
/// ```
///
/// # Modules
///
/// - `storage`: Adapts chain storage to the contract host functions
/// - `executor`: ContractExecutor implementation for native contracts
mod executor;
mod storage;

pub use executor::NativeExecutor;
pub use storage::NativeStorageAdapter;
