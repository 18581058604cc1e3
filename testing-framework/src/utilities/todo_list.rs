// File: testing-framework/src/utilities/todo_list.rs
//
// TodoList Contract Client
//
// Wraps instruction encoding and return data decoding so tests read like
// calls on the contract itself.

use std::sync::Arc;

use log::debug;
use thiserror::Error;
use todo_common::{
    crypto::Hash,
    serializer::{ReaderError, Serializer},
    todo::{Todo, TodoId},
};
use todo_daemon::core::{
    error::BlockchainError, storage::StoredEvent, CallReceipt, DeployReceipt, LocalChain,
};
use todo_list_contract::{encode_constructor, Instruction, CONTRACT_NAME};

use crate::tier1_component::TestBlockchain;

/// Errors surfaced by [`TodoListContract`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The contract exited with a non-zero code
    #[error("Contract reverted with exit code {0}")]
    Reverted(u64),

    /// Any other chain failure
    #[error(transparent)]
    Chain(BlockchainError),

    /// A query returned no data
    #[error("Contract returned no data")]
    MissingReturnData,

    /// Return data could not be decoded
    #[error("Invalid return data: {0}")]
    InvalidReturnData(#[from] ReaderError),
}

impl From<BlockchainError> for ContractError {
    fn from(err: BlockchainError) -> Self {
        match err.exit_code() {
            Some(code) => ContractError::Reverted(code),
            None => ContractError::Chain(err),
        }
    }
}

/// Handle on a deployed TodoList
#[derive(Clone)]
pub struct TodoListContract {
    chain: Arc<LocalChain>,
    address: Hash,
    sender: Hash,
}

impl TodoListContract {
    /// Deploy a new TodoList called `name` from the blockchain's deployer
    pub async fn deploy(blockchain: &TestBlockchain, name: &str) -> Result<Self, ContractError> {
        let receipt = Self::deploy_from(blockchain.chain(), blockchain.deployer(), name).await?;
        Ok(Self::at(
            Arc::clone(blockchain.chain()),
            receipt.address,
            blockchain.deployer().clone(),
        ))
    }

    /// Deploy a new TodoList from an explicit account, returning the receipt
    pub async fn deploy_from(
        chain: &Arc<LocalChain>,
        deployer: &Hash,
        name: &str,
    ) -> Result<DeployReceipt, ContractError> {
        let factory = chain.get_contract_factory(CONTRACT_NAME)?;
        let receipt = factory.deploy(deployer, &encode_constructor(name)).await?;
        debug!("TodoList '{}' deployed to {}", name, receipt.address);
        Ok(receipt)
    }

    /// Attach to an already deployed TodoList
    pub fn at(chain: Arc<LocalChain>, address: Hash, sender: Hash) -> Self {
        Self {
            chain,
            address,
            sender,
        }
    }

    /// Same contract, calls sent from another account
    pub fn connect(&self, sender: Hash) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
            address: self.address.clone(),
            sender,
        }
    }

    /// Contract address
    pub fn address(&self) -> &Hash {
        &self.address
    }

    /// Account sending the calls
    pub fn sender(&self) -> &Hash {
        &self.sender
    }

    async fn send(&self, instruction: Instruction) -> Result<CallReceipt, ContractError> {
        let receipt = self
            .chain
            .call(&self.address, &self.sender, &instruction.encode())
            .await?;
        Ok(receipt)
    }

    async fn query<T: Serializer>(&self, instruction: Instruction) -> Result<T, ContractError> {
        let receipt = self.send(instruction).await?;
        let data = receipt
            .return_data
            .ok_or(ContractError::MissingReturnData)?;
        Ok(T::from_bytes(&data)?)
    }

    /// `name()`
    pub async fn name(&self) -> Result<String, ContractError> {
        self.query(Instruction::Name).await
    }

    /// `updateName(name)`
    pub async fn update_name(&self, name: &str) -> Result<CallReceipt, ContractError> {
        self.send(Instruction::UpdateName {
            name: name.to_string(),
        })
        .await
    }

    /// `createTodo(content)`, returning the id of the new todo
    pub async fn create_todo(&self, content: &str) -> Result<TodoId, ContractError> {
        self.query(Instruction::CreateTodo {
            content: content.to_string(),
        })
        .await
    }

    /// `getAllTodos()`
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, ContractError> {
        self.query(Instruction::GetAllTodos).await
    }

    /// `getTodoById(id)`
    pub async fn get_todo_by_id(&self, id: TodoId) -> Result<Todo, ContractError> {
        self.query(Instruction::GetTodoById { id }).await
    }

    /// `updateTodo(id, content, isCompleted)`
    pub async fn update_todo(
        &self,
        id: TodoId,
        content: &str,
        is_completed: bool,
    ) -> Result<CallReceipt, ContractError> {
        self.send(Instruction::UpdateTodo {
            id,
            content: content.to_string(),
            is_completed,
        })
        .await
    }

    /// `toggleCompletedById(id)`, returning the new completion flag
    pub async fn toggle_completed_by_id(&self, id: TodoId) -> Result<bool, ContractError> {
        self.query(Instruction::ToggleCompletedById { id }).await
    }

    /// Number of todos in the list
    pub async fn todo_count(&self) -> Result<u64, ContractError> {
        self.query(Instruction::TodoCount).await
    }

    /// Events emitted by this contract, oldest first
    pub async fn events(&self) -> Vec<StoredEvent> {
        self.chain.get_events(&self.address).await
    }
}
