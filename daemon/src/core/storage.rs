use std::collections::HashMap;

use anyhow::Result;
use indexmap::IndexMap;
use todo_common::{
    contract::{ContractCache, ContractEvent, ContractProvider, TopoHeight},
    crypto::Hash,
};

/// State of a deployed contract
#[derive(Debug, Clone)]
pub struct ContractState {
    /// Registry name of the contract code
    pub name: &'static str,
    pub storage: IndexMap<Vec<u8>, Vec<u8>>,
}

/// Event stored with the topoheight it was emitted at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEvent {
    pub topoheight: TopoHeight,
    pub event: ContractEvent,
}

/// In-memory state of the local chain
#[derive(Debug, Default)]
pub struct ChainStorage {
    contracts: IndexMap<Hash, ContractState>,
    nonces: HashMap<Hash, u64>,
    events: Vec<StoredEvent>,
    topoheight: TopoHeight,
}

impl ChainStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_topoheight(&self) -> TopoHeight {
        self.topoheight
    }

    // Advance the topoheight by one and return the new value
    pub fn increment_topoheight(&mut self) -> TopoHeight {
        self.topoheight += 1;
        self.topoheight
    }

    pub fn get_nonce(&self, account: &Hash) -> u64 {
        self.nonces.get(account).copied().unwrap_or(0)
    }

    pub fn set_nonce(&mut self, account: &Hash, nonce: u64) {
        self.nonces.insert(account.clone(), nonce);
    }

    pub fn get_contract(&self, address: &Hash) -> Option<&ContractState> {
        self.contracts.get(address)
    }

    pub fn contracts_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn add_contract(&mut self, address: Hash, state: ContractState) {
        self.contracts.insert(address, state);
    }

    /// Merge an execution overlay into a contract storage
    ///
    /// Returns false if no contract is deployed at this address.
    pub fn merge_cache(&mut self, address: &Hash, cache: ContractCache) -> bool {
        match self.contracts.get_mut(address) {
            Some(state) => {
                state.storage.extend(cache.storage);
                true
            }
            None => false,
        }
    }

    pub fn add_events(&mut self, topoheight: TopoHeight, events: Vec<ContractEvent>) {
        self.events.extend(
            events
                .into_iter()
                .map(|event| StoredEvent { topoheight, event }),
        );
    }

    pub fn get_events_for(&self, address: &Hash) -> Vec<StoredEvent> {
        self.events
            .iter()
            .filter(|stored| &stored.event.contract == address)
            .cloned()
            .collect()
    }
}

impl ContractProvider for ChainStorage {
    fn load_data(&self, contract: &Hash, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self
            .contracts
            .get(contract)
            .and_then(|state| state.storage.get(key).cloned()))
    }
}
