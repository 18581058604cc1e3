#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
// File: testing-framework/tests/todo_list_integration_test.rs
//
// TodoList Contract Integration Tests
//
// Drives a freshly deployed TodoList per test through the local chain:
// - Construction with a name, name update
// - Todo creation and listing
// - Update of content and completion flag by id
// - Completion toggling
// - Single todo lookup by id
// - Reverts on unknown ids leave the state untouched
// - Events and independent deployments

use todo_common::crypto::hash;
use todo_list_contract::{EVENT_NAME_UPDATED, EVENT_TODO_CREATED, EVENT_TODO_TOGGLED};
use todo_testing_framework::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Every scenario starts from a new chain and a new "My Todo" list
async fn deploy_todo_list() -> TodoListContract {
    init_logger();
    let blockchain = TestBlockchainBuilder::new().build().unwrap();
    TodoListContract::deploy(&blockchain, "My Todo").await.unwrap()
}

// ============================================================================
// Core scenarios
// ============================================================================

#[tokio::test]
async fn test_create_and_update_the_name_of_todo_list() {
    let todo = deploy_todo_list().await;

    assert_eq!(todo.name().await.unwrap(), "My Todo");

    todo.update_name("My Todo Dapp").await.unwrap();

    assert_eq!(todo.name().await.unwrap(), "My Todo Dapp");
}

#[tokio::test]
async fn test_create_a_new_todo() {
    let todo = deploy_todo_list().await;

    todo.create_todo("Todo 1").await.unwrap();

    let todos = todo.get_all_todos().await.unwrap();
    assert_eq!(todos[0].content, "Todo 1");
}

#[tokio::test]
async fn test_update_the_content_of_a_specific_todo() {
    let todo = deploy_todo_list().await;
    todo.create_todo("Todo 1").await.unwrap();

    todo.update_todo(0, "new Todo", true).await.unwrap();

    let todos = todo.get_all_todos().await.unwrap();
    assert_eq!(todos[0].content, "new Todo");
    assert!(todos[0].is_completed);
}

#[tokio::test]
async fn test_toggle_the_is_completed_field() {
    let todo = deploy_todo_list().await;
    todo.create_todo("Todo 1").await.unwrap();

    todo.toggle_completed_by_id(0).await.unwrap();

    let todos = todo.get_all_todos().await.unwrap();
    assert!(todos[0].is_completed);

    todo.toggle_completed_by_id(0).await.unwrap();
    let todos = todo.get_all_todos().await.unwrap();
    assert!(!todos[0].is_completed);
}

#[tokio::test]
async fn test_get_a_single_todo_by_id() {
    let todo = deploy_todo_list().await;
    todo.create_todo("Todo 1").await.unwrap();

    let todo_item = todo.get_todo_by_id(0).await.unwrap();

    assert_eq!(todo_item.content, "Todo 1");
    assert!(!todo_item.is_completed);
}

// ============================================================================
// Edge cases
// ============================================================================

#[tokio::test]
async fn test_ids_are_sequential_and_order_is_kept() {
    let todo = deploy_todo_list().await;

    for i in 0..5u64 {
        let id = todo.create_todo(&format!("Todo {}", i)).await.unwrap();
        assert_eq!(id, i);
    }

    let todos = todo.get_all_todos().await.unwrap();
    assert_eq!(todos.len(), 5);
    for (i, item) in todos.iter().enumerate() {
        assert_eq!(item.content, format!("Todo {}", i));
    }
    assert_eq!(todo.todo_count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_unknown_id_reverts_without_changing_state() {
    let todo = deploy_todo_list().await;
    todo.create_todo("Todo 1").await.unwrap();
    let events_before = todo.events().await.len();

    assert_eq!(
        todo.get_todo_by_id(1).await.unwrap_err(),
        ContractError::Reverted(ERR_TODO_NOT_FOUND)
    );
    assert_eq!(
        todo.update_todo(1, "new Todo", true).await.unwrap_err(),
        ContractError::Reverted(ERR_TODO_NOT_FOUND)
    );
    assert_eq!(
        todo.toggle_completed_by_id(u64::MAX).await.unwrap_err(),
        ContractError::Reverted(ERR_TODO_NOT_FOUND)
    );

    assert_eq!(todo.get_all_todos().await.unwrap(), vec![Todo::new("Todo 1")]);
    assert_eq!(todo.events().await.len(), events_before);
}

#[tokio::test]
async fn test_empty_list() {
    let todo = deploy_todo_list().await;
    assert!(todo.get_all_todos().await.unwrap().is_empty());
    assert_eq!(todo.todo_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_queries_do_not_change_state() {
    init_logger();
    let blockchain = TestBlockchainBuilder::new().build().unwrap();
    let todo = TodoListContract::deploy(&blockchain, "My Todo").await.unwrap();
    let topoheight = blockchain.get_topoheight().await;

    todo.name().await.unwrap();
    todo.get_all_todos().await.unwrap();
    assert_eq!(blockchain.get_topoheight().await, topoheight);

    let receipt = todo.update_name("Renamed").await.unwrap();
    assert!(receipt.state_changed);
    assert_eq!(receipt.topoheight, topoheight + 1);
}

#[tokio::test]
async fn test_events_follow_state_changes() {
    let todo = deploy_todo_list().await;

    todo.update_name("My Todo Dapp").await.unwrap();
    todo.create_todo("Todo 1").await.unwrap();
    todo.toggle_completed_by_id(0).await.unwrap();

    let signatures: Vec<Hash> = todo
        .events()
        .await
        .into_iter()
        .map(|stored| stored.event.topics[0].clone())
        .collect();
    assert_eq!(
        signatures,
        vec![
            hash(EVENT_NAME_UPDATED.as_bytes()),
            hash(EVENT_TODO_CREATED.as_bytes()),
            hash(EVENT_TODO_TOGGLED.as_bytes()),
        ]
    );
}

#[tokio::test]
async fn test_deployments_are_independent() {
    init_logger();
    let blockchain = TestBlockchainBuilder::new().build().unwrap();
    let first = TodoListContract::deploy(&blockchain, "First").await.unwrap();
    let second = TodoListContract::deploy(&blockchain, "Second").await.unwrap();

    assert_ne!(first.address(), second.address());

    first.create_todo("Only in first").await.unwrap();

    assert_eq!(first.name().await.unwrap(), "First");
    assert_eq!(second.name().await.unwrap(), "Second");
    assert_eq!(first.todo_count().await.unwrap(), 1);
    assert!(second.get_all_todos().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_calls_from_another_account() {
    let todo = deploy_todo_list().await;
    let other = todo.connect(create_test_account(2));
    assert_eq!(other.sender(), &create_test_account(2));

    other.create_todo("From another account").await.unwrap();
    assert_eq!(
        todo.get_todo_by_id(0).await.unwrap().content,
        "From another account"
    );
}

#[tokio::test]
async fn test_deploy_from_explicit_deployer() {
    init_logger();
    let deployer = create_test_account(5);
    let blockchain = TestBlockchainBuilder::new()
        .with_deployer(deployer.clone())
        .build()
        .unwrap();

    let receipt = TodoListContract::deploy_from(blockchain.chain(), &deployer, "My Todos")
        .await
        .unwrap();
    assert_eq!(receipt.deployer, deployer);
    assert_eq!(receipt.nonce, 0);

    let todo = TodoListContract::at(
        blockchain.chain().clone(),
        receipt.address.clone(),
        deployer,
    );
    assert_eq!(todo.name().await.unwrap(), "My Todos");
}

#[tokio::test]
async fn test_unicode_and_empty_content() {
    let todo = deploy_todo_list().await;

    todo.create_todo("").await.unwrap();
    todo.create_todo("acheter du pain 🥖").await.unwrap();

    let todos = todo.get_all_todos().await.unwrap();
    assert_eq!(todos[0].content, "");
    assert_eq!(todos[1].content, "acheter du pain 🥖");
}

#[tokio::test]
async fn test_oversized_content_reverts() {
    let todo = deploy_todo_list().await;
    let content = "x".repeat(64 * 1024);

    assert_eq!(
        todo.create_todo(&content).await.unwrap_err(),
        ContractError::Reverted(ERR_STORAGE)
    );
    assert_eq!(todo.todo_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_all_todos_stays_returnable_when_full() {
    let todo = deploy_todo_list().await;
    // Each stored todo is exactly 64 KiB: 4-byte length, content, 1-byte flag
    let content = "x".repeat(64 * 1024 - 5);

    for _ in 0..63 {
        todo.create_todo(&content).await.unwrap();
    }
    assert_eq!(
        todo.create_todo(&content).await.unwrap_err(),
        ContractError::Reverted(ERR_STORAGE)
    );

    assert_eq!(todo.todo_count().await.unwrap(), 63);
    let todos = todo.get_all_todos().await.unwrap();
    assert_eq!(todos.len(), 63);
    assert_eq!(todos[62].content, content);
}
