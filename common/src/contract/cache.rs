use indexmap::IndexMap;

/// Write overlay produced by a single contract execution
///
/// Every `storage_write` lands here first. Reads check the overlay before the
/// backing provider, so a contract observes its own writes immediately. The
/// overlay is only merged into persistent storage when the execution exits
/// successfully; on failure it is dropped, which rolls back every write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractCache {
    pub storage: IndexMap<Vec<u8>, Vec<u8>>,
}

impl ContractCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &[u8]) -> Option<&Vec<u8>> {
        self.storage.get(key)
    }

    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.storage.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }
}
