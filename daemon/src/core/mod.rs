mod chain;
pub mod error;
mod factory;
pub mod storage;

pub use chain::{CallReceipt, DeployReceipt, LocalChain};
pub use factory::ContractFactory;

#[cfg(test)]
mod tests;
