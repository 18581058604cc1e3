use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, info, trace};
use serde::Serialize;
use tokio::sync::RwLock;
use todo_common::{
    contract::{ContractEvent, ContractExecutor, EntryPoint, NativeContract, TopoHeight},
    crypto::{compute_contract_address, Hash},
};

use super::{
    error::BlockchainError,
    factory::ContractFactory,
    storage::{ChainStorage, ContractState, StoredEvent},
};
use crate::native_integration::NativeExecutor;

/// Outcome of a successful deployment
#[derive(Debug, Clone, Serialize)]
pub struct DeployReceipt {
    /// Registry name of the deployed contract
    pub contract: &'static str,
    pub address: Hash,
    pub deployer: Hash,
    /// Deployer nonce consumed by this deployment
    pub nonce: u64,
    pub topoheight: TopoHeight,
    #[serde(skip)]
    pub logs: Vec<String>,
}

/// Outcome of a successful call
#[derive(Debug, Clone)]
pub struct CallReceipt {
    pub return_data: Option<Vec<u8>>,
    pub events: Vec<ContractEvent>,
    pub logs: Vec<String>,
    /// Topoheight after the call
    pub topoheight: TopoHeight,
    /// Whether the call wrote storage or emitted events
    pub state_changed: bool,
}

/// In-process chain hosting native contracts
///
/// Comparable to a development network: calls are applied immediately and
/// sequentially, there are no blocks, fees or signatures. Each state-changing
/// call advances the topoheight by one.
pub struct LocalChain {
    registry: IndexMap<&'static str, Arc<dyn NativeContract>>,
    executor: Arc<dyn ContractExecutor>,
    storage: RwLock<ChainStorage>,
}

impl LocalChain {
    pub fn new(executor: Arc<dyn ContractExecutor>) -> Self {
        Self {
            registry: IndexMap::new(),
            executor,
            storage: RwLock::new(ChainStorage::new()),
        }
    }

    pub fn with_native_executor() -> Self {
        Self::new(Arc::new(NativeExecutor::new()))
    }

    /// Make a contract available for deployment under its name
    pub fn register_contract(
        &mut self,
        contract: Arc<dyn NativeContract>,
    ) -> Result<(), BlockchainError> {
        let name = contract.name();
        if self.registry.contains_key(name) {
            return Err(BlockchainError::ContractAlreadyRegistered(name.to_string()));
        }

        debug!("Registering contract {}", name);
        self.registry.insert(name, contract);
        Ok(())
    }

    pub fn registered_contracts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.keys().copied()
    }

    pub fn executor_name(&self) -> &'static str {
        self.executor.name()
    }

    /// Get a factory able to deploy instances of the contract named `name`
    pub fn get_contract_factory(
        self: &Arc<Self>,
        name: &str,
    ) -> Result<ContractFactory, BlockchainError> {
        let contract = self
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| BlockchainError::UnknownContract(name.to_string()))?;

        Ok(ContractFactory::new(Arc::clone(self), contract))
    }

    /// Deploy a new instance of `contract`, running its constructor with `params`
    ///
    /// The address depends on the deployer and its nonce, so every deployment
    /// gets a fresh address and a fresh storage. Nothing is persisted if the
    /// constructor fails.
    pub async fn deploy(
        &self,
        contract: &Arc<dyn NativeContract>,
        deployer: &Hash,
        params: &[u8],
    ) -> Result<DeployReceipt, BlockchainError> {
        let mut storage = self.storage.write().await;

        let nonce = storage.get_nonce(deployer);
        let next_nonce = nonce
            .checked_add(1)
            .ok_or_else(|| BlockchainError::NonceOverflow(deployer.clone()))?;

        let address = compute_contract_address(deployer, nonce, contract.code());
        if storage.get_contract(&address).is_some() {
            return Err(BlockchainError::ContractAlreadyExists(address));
        }

        let result = self
            .executor
            .execute(
                contract.as_ref(),
                &*storage,
                EntryPoint::Constructor,
                storage.get_topoheight(),
                &address,
                deployer,
                params,
            )
            .await
            .map_err(|e| BlockchainError::ExecutorFailed {
                executor: self.executor.name(),
                reason: format!("{:#}", e),
            })?;

        if !result.is_success() {
            debug!(
                "Constructor of {} failed with exit code {}: {:?}",
                contract.name(),
                result.exit_code,
                result.logs
            );
            return Err(BlockchainError::ConstructorFailed {
                name: contract.name().to_string(),
                code: result.exit_code,
            });
        }

        storage.set_nonce(deployer, next_nonce);
        let topoheight = storage.increment_topoheight();
        storage.add_contract(
            address.clone(),
            ContractState {
                name: contract.name(),
                storage: result.cache.map(|cache| cache.storage).unwrap_or_default(),
            },
        );
        storage.add_events(topoheight, result.events);

        info!(
            "Deployed {} at {} (deployer {}, topoheight {})",
            contract.name(),
            address,
            deployer,
            topoheight
        );

        Ok(DeployReceipt {
            contract: contract.name(),
            address,
            deployer: deployer.clone(),
            nonce,
            topoheight,
            logs: result.logs,
        })
    }

    /// Call a deployed contract
    ///
    /// A non-zero exit code is reported as [`BlockchainError::ExecutionReverted`]
    /// and leaves the contract storage untouched.
    pub async fn call(
        &self,
        address: &Hash,
        sender: &Hash,
        input: &[u8],
    ) -> Result<CallReceipt, BlockchainError> {
        let mut storage = self.storage.write().await;

        let name = storage
            .get_contract(address)
            .ok_or_else(|| BlockchainError::ContractNotFound(address.clone()))?
            .name;
        let contract = self
            .registry
            .get(name)
            .ok_or_else(|| BlockchainError::UnknownContract(name.to_string()))?;

        let result = self
            .executor
            .execute(
                contract.as_ref(),
                &*storage,
                EntryPoint::Call,
                storage.get_topoheight(),
                address,
                sender,
                input,
            )
            .await
            .map_err(|e| BlockchainError::ExecutorFailed {
                executor: self.executor.name(),
                reason: format!("{:#}", e),
            })?;

        if !result.is_success() {
            debug!(
                "Call to {} reverted with exit code {}: {:?}",
                address, result.exit_code, result.logs
            );
            return Err(BlockchainError::ExecutionReverted {
                contract: address.clone(),
                code: result.exit_code,
            });
        }

        let cache = result.cache.unwrap_or_default();
        let state_changed = !cache.is_empty() || !result.events.is_empty();
        let topoheight = if state_changed {
            let topoheight = storage.increment_topoheight();
            storage.merge_cache(address, cache);
            storage.add_events(topoheight, result.events.clone());
            topoheight
        } else {
            storage.get_topoheight()
        };

        trace!(
            "Call to {} succeeded at topoheight {} (state changed: {})",
            address,
            topoheight,
            state_changed
        );

        Ok(CallReceipt {
            return_data: result.return_data,
            events: result.events,
            logs: result.logs,
            topoheight,
            state_changed,
        })
    }

    pub async fn get_topoheight(&self) -> TopoHeight {
        self.storage.read().await.get_topoheight()
    }

    pub async fn contracts_count(&self) -> usize {
        self.storage.read().await.contracts_count()
    }

    pub async fn get_nonce(&self, account: &Hash) -> u64 {
        self.storage.read().await.get_nonce(account)
    }

    /// All events emitted by the contract at `address`, oldest first
    pub async fn get_events(&self, address: &Hash) -> Vec<StoredEvent> {
        self.storage.read().await.get_events_for(address)
    }
}
