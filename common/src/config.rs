use crate::crypto::Hash;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Name given to a TodoList when none is provided at deploy time
pub const DEFAULT_TODO_LIST_NAME: &str = "My Todos";

// Account used as the transaction sender when no deployer is configured
// Mirrors the first funded account of a development network
pub const DEV_ACCOUNT: Hash = Hash::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
]);

// Contracts host limits
// Storage keys are short by convention, a key above this size is rejected
pub const MAX_STORAGE_KEY_SIZE: usize = 256;
// Maximum size of a single stored value (64 KiB)
pub const MAX_STORAGE_VALUE_SIZE: usize = 64 * 1024;
// Maximum number of events a single call can emit
pub const MAX_EVENTS_PER_CALL: usize = 64;
// Maximum number of indexed topics per event (Ethereum-compatible)
pub const MAX_EVENT_TOPICS: usize = 4;
// Return data can carry a full todo list, so it is allowed to grow larger than a value
pub const MAX_RETURN_DATA_SIZE: usize = 4 * 1024 * 1024;

// Contract exit code meaning the call succeeded
pub const SUCCESS: u64 = 0;
