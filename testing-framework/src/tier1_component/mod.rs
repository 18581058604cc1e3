//! Tier 1: Component-level testing
//!
//! In-process local chain testing without RPC/P2P.
//! Fast and deterministic: every test builds its own chain.
//!
//! ## Example
//!
//! ```rust,ignore
//! use todo_testing_framework::prelude::*;
//!
//! #[tokio::test]
//! async fn test_fresh_chain() {
//!     let blockchain = TestBlockchainBuilder::new()
//!         .with_deployer(create_test_account(7))
//!         .build()
//!         .unwrap();
//!
//!     // Test logic here...
//! }
//! ```

mod blockchain;
mod builder;

pub use blockchain::TestBlockchain;
pub use builder::TestBlockchainBuilder;
