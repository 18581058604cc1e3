// File: testing-framework/src/utilities/mod.rs
//
// Testing Utilities
//
// Typed contract clients and test data helpers shared by all tests.

/// Typed client for deployed TodoList contracts
pub mod todo_list;

pub use todo_list::{ContractError, TodoListContract};

use todo_common::crypto::{Hash, HASH_SIZE};

/// Deterministic test account derived from a small id
pub fn create_test_account(id: u8) -> Hash {
    let mut bytes = [0u8; HASH_SIZE];
    bytes[0] = id;
    for (i, byte) in bytes.iter_mut().enumerate().skip(1) {
        *byte = id.wrapping_mul(i as u8).wrapping_add(i as u8);
    }
    Hash::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_are_distinct_and_stable() {
        assert_eq!(create_test_account(1), create_test_account(1));
        assert_ne!(create_test_account(1), create_test_account(2));
        assert_eq!(create_test_account(3).as_bytes()[0], 3);
    }
}
