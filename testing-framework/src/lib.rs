//! # TodoList Testing Framework
//!
//! In-process testing for TodoList contracts on the local chain.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use todo_testing_framework::prelude::*;
//!
//! #[tokio::test]
//! async fn test_create_todo() {
//!     let blockchain = TestBlockchainBuilder::new().build().unwrap();
//!     let todo = TodoListContract::deploy(&blockchain, "My Todo").await.unwrap();
//!
//!     todo.create_todo("Todo 1").await.unwrap();
//!     assert_eq!(todo.get_all_todos().await.unwrap()[0].content, "Todo 1");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Tier 1: Component-level testing (in-process, no RPC/P2P)
pub mod tier1_component;

/// Shared utilities: typed contract clients and test accounts
pub mod utilities;

/// Convenient re-exports for common usage
pub mod prelude;

// Re-export commonly used types at crate root
pub use tier1_component::{TestBlockchain, TestBlockchainBuilder};
pub use utilities::{ContractError, TodoListContract};
