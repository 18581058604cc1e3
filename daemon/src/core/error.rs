use thiserror::Error;
use todo_common::crypto::Hash;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockchainError {
    #[error("No contract registered under the name '{0}'")]
    UnknownContract(String),

    #[error("A contract named '{0}' is already registered")]
    ContractAlreadyRegistered(String),

    #[error("No contract deployed at {0}")]
    ContractNotFound(Hash),

    #[error("A contract is already deployed at {0}")]
    ContractAlreadyExists(Hash),

    #[error("Constructor of '{name}' failed with exit code {code}")]
    ConstructorFailed { name: String, code: u64 },

    #[error("Call to contract {contract} reverted with exit code {code}")]
    ExecutionReverted { contract: Hash, code: u64 },

    #[error("Contract executor {executor} failed: {reason}")]
    ExecutorFailed {
        executor: &'static str,
        reason: String,
    },

    #[error("Deployer nonce overflow for {0}")]
    NonceOverflow(Hash),
}

impl BlockchainError {
    /// Contract exit code carried by a revert, if this error is one
    pub fn exit_code(&self) -> Option<u64> {
        match self {
            Self::ConstructorFailed { code, .. } | Self::ExecutionReverted { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }
}
