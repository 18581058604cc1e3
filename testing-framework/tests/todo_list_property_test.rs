//! Property-based tests for the TodoList contract
//!
//! Each case deploys a fresh list and checks state against a plain model.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use todo_testing_framework::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

async fn deploy() -> TodoListContract {
    let blockchain = TestBlockchainBuilder::new().build().unwrap();
    TodoListContract::deploy(&blockchain, "My Todo").await.unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Toggling n times leaves the todo completed iff n is odd
    #[test]
    fn prop_toggle_parity(n in 0usize..16) {
        let completed = runtime().block_on(async {
            let todo = deploy().await;
            todo.create_todo("Todo 1").await.unwrap();
            for _ in 0..n {
                todo.toggle_completed_by_id(0).await.unwrap();
            }
            todo.get_todo_by_id(0).await.unwrap().is_completed
        });
        prop_assert_eq!(completed, n % 2 == 1);
    }

    /// Created todos come back in creation order with matching ids
    #[test]
    fn prop_create_then_list(contents in prop::collection::vec(".{0,24}", 0..8)) {
        let (ids, todos) = runtime().block_on(async {
            let todo = deploy().await;
            let mut ids = Vec::with_capacity(contents.len());
            for content in &contents {
                ids.push(todo.create_todo(content).await.unwrap());
            }
            (ids, todo.get_all_todos().await.unwrap())
        });

        let expected_ids: Vec<u64> = (0..contents.len() as u64).collect();
        prop_assert_eq!(ids, expected_ids);
        let expected: Vec<Todo> = contents.iter().map(|c| Todo::new(c.clone())).collect();
        prop_assert_eq!(todos, expected);
    }

    /// Ids at or past the count always revert with the not-found code
    #[test]
    fn prop_unknown_id_reverts(created in 0u64..4, offset in 0u64..1000) {
        let err = runtime().block_on(async {
            let todo = deploy().await;
            for i in 0..created {
                todo.create_todo(&format!("Todo {}", i)).await.unwrap();
            }
            todo.get_todo_by_id(created + offset).await.unwrap_err()
        });
        prop_assert_eq!(err, ContractError::Reverted(ERR_TODO_NOT_FOUND));
    }
}
