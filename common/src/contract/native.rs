use crate::{crypto::Hash, error::StorageError};

/// Host functions available to a contract during execution
///
/// This is the native counterpart of the syscalls a VM contract would use:
/// keyed storage, return data, events and logging. Implementations enforce
/// the host limits from [`crate::config`] and report violations as
/// [`StorageError`].
pub trait ContractRuntime {
    /// Read a storage value, `None` if the key was never written
    ///
    /// A backend failure is reported as [`StorageError::Backend`], never as a
    /// missing key.
    fn storage_read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    fn storage_write(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Replace the data returned to the caller
    fn set_return_data(&mut self, data: &[u8]) -> Result<(), StorageError>;

    /// Emit an event with indexed topics (max 4) and opaque data
    fn emit_event(&mut self, topics: Vec<Hash>, data: Vec<u8>) -> Result<(), StorageError>;

    fn log(&mut self, message: &str);
}

/// A contract compiled into the node
///
/// Contracts return an exit code: [`crate::config::SUCCESS`] on success, any
/// other value is an application error code and causes the whole call to be
/// rolled back.
pub trait NativeContract: Send + Sync {
    /// Name used to look the contract up in a registry
    fn name(&self) -> &'static str;

    /// Code identifier, hashed into the deployment address
    fn code(&self) -> &'static [u8];

    /// Run once when the contract is deployed
    fn constructor(&self, runtime: &mut dyn ContractRuntime, params: &[u8]) -> u64;

    /// Run for every call made to the deployed contract
    fn entrypoint(&self, runtime: &mut dyn ContractRuntime, input: &[u8]) -> u64;
}
