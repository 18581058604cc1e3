use std::sync::Arc;

use todo_common::{contract::NativeContract, crypto::Hash};

use super::{
    chain::{DeployReceipt, LocalChain},
    error::BlockchainError,
};

/// Deploys instances of one registered contract on a [`LocalChain`]
#[derive(Clone)]
pub struct ContractFactory {
    chain: Arc<LocalChain>,
    contract: Arc<dyn NativeContract>,
}

impl std::fmt::Debug for ContractFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractFactory").finish_non_exhaustive()
    }
}

impl ContractFactory {
    pub(super) fn new(chain: Arc<LocalChain>, contract: Arc<dyn NativeContract>) -> Self {
        Self { chain, contract }
    }

    pub fn name(&self) -> &'static str {
        self.contract.name()
    }

    pub fn chain(&self) -> &Arc<LocalChain> {
        &self.chain
    }

    /// Deploy a new instance, `params` being the constructor parameters
    pub async fn deploy(
        &self,
        deployer: &Hash,
        params: &[u8],
    ) -> Result<DeployReceipt, BlockchainError> {
        self.chain.deploy(&self.contract, deployer, params).await
    }
}
