mod cache;
mod executor;
mod native;
mod provider;

pub use cache::ContractCache;
pub use executor::{
    ContractEvent, ContractExecutionResult, ContractExecutor, EntryPoint, NoOpExecutor,
};
pub use native::{ContractRuntime, NativeContract};
pub use provider::ContractProvider;

// Monotonic counter of state changes applied to the chain
pub type TopoHeight = u64;
