use std::sync::Arc;

use todo_common::{contract::TopoHeight, crypto::Hash};
use todo_daemon::core::{error::BlockchainError, ContractFactory, LocalChain};

/// A local chain prepared for a single test
///
/// Holds the account used to deploy and call contracts when a test does not
/// pick one explicitly.
#[derive(Clone)]
pub struct TestBlockchain {
    chain: Arc<LocalChain>,
    deployer: Hash,
}

impl TestBlockchain {
    pub(super) fn new(chain: Arc<LocalChain>, deployer: Hash) -> Self {
        Self { chain, deployer }
    }

    /// Underlying chain
    pub fn chain(&self) -> &Arc<LocalChain> {
        &self.chain
    }

    /// Default sender for deployments and calls
    pub fn deployer(&self) -> &Hash {
        &self.deployer
    }

    /// Factory for a registered contract
    pub fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, BlockchainError> {
        self.chain.get_contract_factory(name)
    }

    /// Current topoheight
    pub async fn get_topoheight(&self) -> TopoHeight {
        self.chain.get_topoheight().await
    }
}
