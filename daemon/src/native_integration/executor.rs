/// Native contract executor
///
/// Runs contracts compiled into the node against the chain storage.
///
/// # Architecture
///
/// ```text
/// LocalChain::call()
///     ↓
/// NativeExecutor::execute()
///     ↓
/// 1. Create NativeStorageAdapter (cache overlay over ContractProvider)
/// 2. Run constructor or entrypoint
/// 3. Collect exit code, return data, events and the cache
/// ```
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, trace};
use todo_common::{
    contract::{
        ContractExecutionResult, ContractExecutor, ContractProvider, EntryPoint, NativeContract,
        TopoHeight,
    },
    crypto::Hash,
};

use super::NativeStorageAdapter;

/// Executor for [`NativeContract`] implementations
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeExecutor;

impl NativeExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContractExecutor for NativeExecutor {
    async fn execute(
        &self,
        contract: &dyn NativeContract,
        provider: &(dyn ContractProvider + Sync),
        entry: EntryPoint,
        topoheight: TopoHeight,
        contract_hash: &Hash,
        tx_sender: &Hash,
        input: &[u8],
    ) -> Result<ContractExecutionResult> {
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Executing {:?} of {} at {} from {} (topoheight {}, {} bytes input)",
                entry,
                contract.name(),
                contract_hash,
                tx_sender,
                topoheight,
                input.len()
            );
        }

        let mut adapter = NativeStorageAdapter::new(provider, contract_hash);
        let exit_code = match entry {
            EntryPoint::Constructor => contract.constructor(&mut adapter, input),
            EntryPoint::Call => contract.entrypoint(&mut adapter, input),
        };

        let (cache, return_data, events, logs) = adapter.into_parts();

        trace!(
            "Execution of {} completed: exit_code={}, {} storage writes, {} events",
            contract_hash,
            exit_code,
            cache.len(),
            events.len()
        );

        Ok(ContractExecutionResult {
            exit_code,
            return_data,
            events,
            logs,
            cache: Some(cache),
        })
    }

    fn name(&self) -> &'static str {
        "NativeExecutor"
    }
}
