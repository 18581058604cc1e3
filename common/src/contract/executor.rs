use super::{ContractCache, ContractProvider, NativeContract, TopoHeight};
use anyhow::Result;
/// Contract execution trait for dependency injection
///
/// This trait lets the chain execute contracts without depending on a
/// specific execution engine. The daemon package implements it and injects
/// the executor into its local chain.
///
/// # Architecture
///
/// ```text
/// Common Package (contract traits)
///     | defines trait
/// ContractExecutor trait
///     ^ implements
/// Daemon Package (native executor)
/// ```
use async_trait::async_trait;

use crate::{config::SUCCESS, crypto::Hash};

/// Contract event emitted during execution
///
/// Events are Ethereum-compatible with indexed topics and arbitrary data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEvent {
    /// Contract address that emitted the event
    pub contract: Hash,
    /// Indexed topics for efficient filtering (max 4, Ethereum-compatible)
    /// topic[0] is the event signature hash
    pub topics: Vec<Hash>,
    /// Non-indexed event data (serialized parameters)
    pub data: Vec<u8>,
}

/// Which function of the contract an execution targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Deployment-time initialization
    Constructor,
    /// Regular call to a deployed contract
    Call,
}

/// Result of contract execution
#[derive(Debug, Clone)]
pub struct ContractExecutionResult {
    /// Exit code from the contract
    /// - `0` = success
    /// - any other value = application error code
    pub exit_code: u64,

    /// Optional return data from the contract
    pub return_data: Option<Vec<u8>>,

    /// Events emitted by the contract during execution (Ethereum-style)
    pub events: Vec<ContractEvent>,

    /// Messages logged by the contract, in emission order
    pub logs: Vec<String>,

    /// Storage overlay produced during execution.
    ///
    /// Only merged to persistent storage when execution succeeds (exit_code == 0).
    /// On failure, this cache is discarded to ensure atomic rollback.
    pub cache: Option<ContractCache>,
}

impl ContractExecutionResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == SUCCESS
    }
}

/// Contract executor trait
///
/// # Example
///
/// ```rust
/// use todo_common::contract::{
///     ContractExecutionResult, ContractExecutor, ContractProvider, EntryPoint, NativeContract,
///     TopoHeight,
/// };
/// use todo_common::crypto::Hash;
/// use async_trait::async_trait;
/// use anyhow::Result;
///
/// struct MyExecutor;
///
/// #[async_trait]
/// impl ContractExecutor for MyExecutor {
///     async fn execute(
///         &self,
///         _contract: &dyn NativeContract,
///         _provider: &(dyn ContractProvider + Sync),
///         _entry: EntryPoint,
///         _topoheight: TopoHeight,
///         _contract_hash: &Hash,
///         _tx_sender: &Hash,
///         _input: &[u8],
///     ) -> Result<ContractExecutionResult> {
///         Ok(ContractExecutionResult {
///             exit_code: 0,
///             return_data: None,
///             events: vec![],
///             logs: vec![],
///             cache: None,
///         })
///     }
///
///     fn name(&self) -> &'static str {
///         "MyExecutor"
///     }
/// }
///
/// let executor = MyExecutor;
/// assert_eq!(executor.name(), "MyExecutor");
/// ```
#[async_trait]
pub trait ContractExecutor: Send + Sync {
    /// Execute a contract entry point
    ///
    /// # Arguments
    ///
    /// * `contract` - Contract implementation to run
    /// * `provider` - Persisted state the execution reads from
    /// * `entry` - Constructor or regular call
    /// * `topoheight` - Current topoheight
    /// * `contract_hash` - Address of the contract being executed
    /// * `tx_sender` - Account sending the call
    /// * `input` - Constructor params or `[opcode][params]` call data
    ///
    /// # Errors
    ///
    /// Returns an error only when execution cannot take place at all. A
    /// contract failing with an error code is a successful execution with a
    /// non-zero `exit_code`.
    async fn execute(
        &self,
        contract: &dyn NativeContract,
        provider: &(dyn ContractProvider + Sync),
        entry: EntryPoint,
        topoheight: TopoHeight,
        contract_hash: &Hash,
        tx_sender: &Hash,
        input: &[u8],
    ) -> Result<ContractExecutionResult>;

    /// Get a human-readable name for this executor
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}

/// Default no-op executor for testing and fallback
///
/// This executor always returns an error when attempting to execute.
pub struct NoOpExecutor;

#[async_trait]
impl ContractExecutor for NoOpExecutor {
    async fn execute(
        &self,
        _contract: &dyn NativeContract,
        _provider: &(dyn ContractProvider + Sync),
        _entry: EntryPoint,
        _topoheight: TopoHeight,
        _contract_hash: &Hash,
        _tx_sender: &Hash,
        _input: &[u8],
    ) -> Result<ContractExecutionResult> {
        anyhow::bail!("NoOpExecutor: No contract executor configured")
    }

    fn name(&self) -> &'static str {
        "NoOpExecutor"
    }
}
