//! Common imports for tests
//!
//! ```rust,ignore
//! use todo_testing_framework::prelude::*;
//! ```

pub use crate::tier1_component::{TestBlockchain, TestBlockchainBuilder};
pub use crate::utilities::{create_test_account, ContractError, TodoListContract};

pub use todo_common::{crypto::Hash, todo::Todo};
pub use todo_daemon::core::error::BlockchainError;
pub use todo_list_contract::{
    ERR_INVALID_INSTRUCTION, ERR_INVALID_PARAMS, ERR_STORAGE, ERR_TODO_NOT_FOUND,
};
