use std::sync::Arc;

use anyhow::{Context, Result};
use todo_common::{
    config::DEV_ACCOUNT,
    contract::{ContractExecutor, NativeContract},
    crypto::Hash,
};
use todo_daemon::{core::LocalChain, native_integration::NativeExecutor};
use todo_list_contract::TodoList;

use super::TestBlockchain;

/// Builder for [`TestBlockchain`]
///
/// The TodoList contract is registered by default; additional contracts and
/// a custom executor can be provided for tests that need them.
pub struct TestBlockchainBuilder {
    deployer: Hash,
    executor: Arc<dyn ContractExecutor>,
    contracts: Vec<Arc<dyn NativeContract>>,
}

impl TestBlockchainBuilder {
    /// Start from the development account, the native executor and TodoList
    pub fn new() -> Self {
        Self {
            deployer: DEV_ACCOUNT,
            executor: Arc::new(NativeExecutor::new()),
            contracts: vec![Arc::new(TodoList)],
        }
    }

    /// Account used as default sender
    pub fn with_deployer(mut self, deployer: Hash) -> Self {
        self.deployer = deployer;
        self
    }

    /// Replace the contract executor
    pub fn with_executor(mut self, executor: Arc<dyn ContractExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Register an additional contract
    pub fn with_contract(mut self, contract: Arc<dyn NativeContract>) -> Self {
        self.contracts.push(contract);
        self
    }

    /// Build the chain, failing if two contracts share a name
    pub fn build(self) -> Result<TestBlockchain> {
        let mut chain = LocalChain::new(self.executor);
        for contract in self.contracts {
            let name = contract.name();
            chain
                .register_contract(contract)
                .with_context(|| format!("Failed to register contract {}", name))?;
        }

        Ok(TestBlockchain::new(Arc::new(chain), self.deployer))
    }
}

impl Default for TestBlockchainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_common::contract::NoOpExecutor;

    #[test]
    fn test_default_registers_todo_list() {
        let blockchain = TestBlockchainBuilder::new().build().unwrap();
        assert_eq!(blockchain.deployer(), &DEV_ACCOUNT);
        assert!(blockchain.get_contract_factory("TodoList").is_ok());
        assert_eq!(blockchain.chain().executor_name(), "NativeExecutor");
    }

    #[test]
    fn test_duplicate_contract_fails_to_build() {
        let result = TestBlockchainBuilder::new()
            .with_contract(Arc::new(TodoList))
            .build();
        let err = result.err().expect("duplicate registration must fail");
        assert!(format!("{:#}", err).contains("Failed to register contract TodoList"));
    }

    #[test]
    fn test_custom_executor() {
        let blockchain = TestBlockchainBuilder::new()
            .with_executor(Arc::new(NoOpExecutor))
            .build()
            .unwrap();
        assert_eq!(blockchain.chain().executor_name(), "NoOpExecutor");
    }
}
