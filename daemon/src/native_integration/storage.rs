/// Storage adapter: ContractProvider → ContractRuntime
///
/// This module bridges the chain's contract storage with the host functions
/// a native contract calls while it executes.
use log::{debug, warn};
use todo_common::{
    config::{
        MAX_EVENTS_PER_CALL, MAX_EVENT_TOPICS, MAX_RETURN_DATA_SIZE, MAX_STORAGE_KEY_SIZE,
        MAX_STORAGE_VALUE_SIZE,
    },
    contract::{ContractCache, ContractEvent, ContractProvider, ContractRuntime},
    crypto::Hash,
    error::StorageError,
};

/// Adapter that wraps a ContractProvider to implement ContractRuntime
///
/// # Architecture
///
/// ```text
/// contract storage_read(key)
///     ↓
/// NativeStorageAdapter::storage_read()
///     ↓
/// Check cache first (in-memory)
///     ↓
/// If cache miss: ContractProvider::load_data()
/// ```
///
/// Writes only ever touch the cache. The executor decides afterwards whether
/// the cache is merged (success) or dropped (failure).
pub struct NativeStorageAdapter<'a> {
    /// Backend storage
    provider: &'a (dyn ContractProvider + Sync),
    /// Current contract being executed
    contract_hash: &'a Hash,
    /// Writes made during this execution
    cache: ContractCache,
    return_data: Option<Vec<u8>>,
    events: Vec<ContractEvent>,
    logs: Vec<String>,
}

impl<'a> NativeStorageAdapter<'a> {
    /// Create a new storage adapter
    ///
    /// # Arguments
    ///
    /// * `provider` - Chain storage provider
    /// * `contract_hash` - Hash of the contract being executed
    pub fn new(provider: &'a (dyn ContractProvider + Sync), contract_hash: &'a Hash) -> Self {
        Self {
            provider,
            contract_hash,
            cache: ContractCache::new(),
            return_data: None,
            events: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Consume the adapter, returning everything produced by the execution
    pub fn into_parts(
        self,
    ) -> (
        ContractCache,
        Option<Vec<u8>>,
        Vec<ContractEvent>,
        Vec<String>,
    ) {
        (self.cache, self.return_data, self.events, self.logs)
    }
}

impl ContractRuntime for NativeStorageAdapter<'_> {
    fn storage_read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        self.provider
            .load_data(self.contract_hash, key)
            .map_err(|e| {
                warn!(
                    "Failed to load storage for contract {}: {:#}",
                    self.contract_hash, e
                );
                StorageError::Backend(format!("{:#}", e))
            })
    }

    fn storage_write(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        if key.len() > MAX_STORAGE_KEY_SIZE {
            return Err(StorageError::KeyTooLarge {
                size: key.len(),
                max: MAX_STORAGE_KEY_SIZE,
            });
        }

        if value.len() > MAX_STORAGE_VALUE_SIZE {
            return Err(StorageError::ValueTooLarge {
                size: value.len(),
                max: MAX_STORAGE_VALUE_SIZE,
            });
        }

        self.cache.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn set_return_data(&mut self, data: &[u8]) -> Result<(), StorageError> {
        if data.len() > MAX_RETURN_DATA_SIZE {
            return Err(StorageError::ReturnDataTooLarge {
                size: data.len(),
                max: MAX_RETURN_DATA_SIZE,
            });
        }

        self.return_data = Some(data.to_vec());
        Ok(())
    }

    fn emit_event(&mut self, topics: Vec<Hash>, data: Vec<u8>) -> Result<(), StorageError> {
        if self.events.len() >= MAX_EVENTS_PER_CALL {
            return Err(StorageError::TooManyEvents(self.events.len() + 1));
        }

        if topics.len() > MAX_EVENT_TOPICS {
            return Err(StorageError::TooManyTopics(topics.len()));
        }

        self.events.push(ContractEvent {
            contract: self.contract_hash.clone(),
            topics,
            data,
        });
        Ok(())
    }

    fn log(&mut self, message: &str) {
        debug!("[{}] {}", self.contract_hash, message);
        self.logs.push(message.to_string());
    }
}
