use std::sync::Arc;

use todo_common::{
    config::{DEV_ACCOUNT, SUCCESS},
    contract::{ContractRuntime, NativeContract, NoOpExecutor},
    crypto::{compute_contract_address, Hash},
    serializer::Serializer,
    todo::Todo,
};
use todo_list_contract::{encode_constructor, Instruction, TodoList, ERR_TODO_NOT_FOUND};

use super::{error::BlockchainError, LocalChain};

// Writes a marker then fails, to check that partial writes never persist
struct WriteThenFail;

impl NativeContract for WriteThenFail {
    fn name(&self) -> &'static str {
        "WriteThenFail"
    }

    fn code(&self) -> &'static [u8] {
        b"WriteThenFail/v1"
    }

    fn constructor(&self, runtime: &mut dyn ContractRuntime, params: &[u8]) -> u64 {
        if runtime.storage_write(b"marker", b"constructor").is_err() {
            return 1;
        }
        // Empty params make the constructor fail after its write
        if params.is_empty() {
            return 42;
        }
        SUCCESS
    }

    fn entrypoint(&self, runtime: &mut dyn ContractRuntime, input: &[u8]) -> u64 {
        if input.is_empty() {
            // Query: return the marker
            let marker = match runtime.storage_read(b"marker") {
                Ok(value) => value.unwrap_or_default(),
                Err(_) => return 1,
            };
            return match runtime.set_return_data(&marker) {
                Ok(()) => SUCCESS,
                Err(_) => 1,
            };
        }

        if runtime.storage_write(b"marker", input).is_err() {
            return 1;
        }
        if runtime.emit_event(vec![Hash::zero()], input.to_vec()).is_err() {
            return 1;
        }
        // Inputs starting with 0xff fail after writing and emitting
        if input[0] == 0xff {
            return 7;
        }
        SUCCESS
    }
}

fn chain() -> Arc<LocalChain> {
    let mut chain = LocalChain::with_native_executor();
    chain.register_contract(Arc::new(TodoList)).unwrap();
    chain.register_contract(Arc::new(WriteThenFail)).unwrap();
    Arc::new(chain)
}

#[tokio::test]
async fn test_deploy_uses_deployer_nonce_for_address() {
    let chain = chain();
    let factory = chain.get_contract_factory("TodoList").unwrap();

    let first = factory
        .deploy(&DEV_ACCOUNT, &encode_constructor("My Todo"))
        .await
        .unwrap();
    let second = factory
        .deploy(&DEV_ACCOUNT, &encode_constructor("My Todo"))
        .await
        .unwrap();

    assert_eq!(first.nonce, 0);
    assert_eq!(second.nonce, 1);
    assert_ne!(first.address, second.address);
    assert_eq!(
        first.address,
        compute_contract_address(&DEV_ACCOUNT, 0, TodoList.code())
    );
    assert_eq!(chain.get_nonce(&DEV_ACCOUNT).await, 2);
    assert_eq!(chain.contracts_count().await, 2);
    assert_eq!(chain.get_topoheight().await, 2);
}

#[tokio::test]
async fn test_unknown_contract_factory() {
    let chain = chain();
    let err = chain.get_contract_factory("Missing").unwrap_err();
    assert_eq!(err, BlockchainError::UnknownContract("Missing".to_string()));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let mut chain = LocalChain::with_native_executor();
    chain.register_contract(Arc::new(TodoList)).unwrap();
    let err = chain.register_contract(Arc::new(TodoList)).unwrap_err();
    assert_eq!(
        err,
        BlockchainError::ContractAlreadyRegistered("TodoList".to_string())
    );
    assert_eq!(chain.registered_contracts().collect::<Vec<_>>(), vec!["TodoList"]);
}

#[tokio::test]
async fn test_failed_constructor_persists_nothing() {
    let chain = chain();
    let factory = chain.get_contract_factory("WriteThenFail").unwrap();

    let err = factory.deploy(&DEV_ACCOUNT, &[]).await.unwrap_err();
    assert_eq!(
        err,
        BlockchainError::ConstructorFailed {
            name: "WriteThenFail".to_string(),
            code: 42
        }
    );
    assert_eq!(err.exit_code(), Some(42));

    // Nonce not consumed, nothing deployed
    assert_eq!(chain.get_nonce(&DEV_ACCOUNT).await, 0);
    assert_eq!(chain.contracts_count().await, 0);
    assert_eq!(chain.get_topoheight().await, 0);
}

#[tokio::test]
async fn test_reverted_call_rolls_back_writes_and_events() {
    let chain = chain();
    let receipt = chain
        .get_contract_factory("WriteThenFail")
        .unwrap()
        .deploy(&DEV_ACCOUNT, &[1])
        .await
        .unwrap();
    let address = receipt.address;

    let ok = chain.call(&address, &DEV_ACCOUNT, &[1, 2, 3]).await.unwrap();
    assert!(ok.state_changed);
    assert_eq!(ok.topoheight, 2);

    let err = chain
        .call(&address, &DEV_ACCOUNT, &[0xff, 0xee])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BlockchainError::ExecutionReverted {
            contract: address.clone(),
            code: 7
        }
    );

    let query = chain.call(&address, &DEV_ACCOUNT, &[]).await.unwrap();
    assert_eq!(query.return_data, Some(vec![1, 2, 3]));
    assert!(!query.state_changed);
    assert_eq!(chain.get_topoheight().await, 2);
    assert_eq!(chain.get_events(&address).await.len(), 1);
}

#[tokio::test]
async fn test_call_on_unknown_address() {
    let chain = chain();
    let address = Hash::new([9u8; 32]);
    let err = chain.call(&address, &DEV_ACCOUNT, &[]).await.unwrap_err();
    assert_eq!(err, BlockchainError::ContractNotFound(address));
    assert_eq!(err.exit_code(), None);
}

#[tokio::test]
async fn test_todo_list_through_chain() {
    let chain = chain();
    let receipt = chain
        .get_contract_factory("TodoList")
        .unwrap()
        .deploy(&DEV_ACCOUNT, &encode_constructor("My Todo"))
        .await
        .unwrap();
    let address = receipt.address;

    let create = Instruction::CreateTodo {
        content: "Todo 1".to_string(),
    };
    let created = chain
        .call(&address, &DEV_ACCOUNT, &create.encode())
        .await
        .unwrap();
    assert_eq!(created.events.len(), 1);
    assert_eq!(
        u64::from_bytes(&created.return_data.unwrap()).unwrap(),
        0
    );

    let err = chain
        .call(
            &address,
            &DEV_ACCOUNT,
            &Instruction::GetTodoById { id: 1 }.encode(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(ERR_TODO_NOT_FOUND));

    let fetched = chain
        .call(
            &address,
            &DEV_ACCOUNT,
            &Instruction::GetTodoById { id: 0 }.encode(),
        )
        .await
        .unwrap();
    assert_eq!(
        Todo::from_bytes(&fetched.return_data.unwrap()).unwrap(),
        Todo::new("Todo 1")
    );
}

#[tokio::test]
async fn test_executor_failure_is_reported() {
    let mut chain = LocalChain::new(Arc::new(NoOpExecutor));
    chain.register_contract(Arc::new(TodoList)).unwrap();
    let chain = Arc::new(chain);
    assert_eq!(chain.executor_name(), "NoOpExecutor");

    let err = chain
        .get_contract_factory("TodoList")
        .unwrap()
        .deploy(&DEV_ACCOUNT, &encode_constructor("My Todo"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BlockchainError::ExecutorFailed {
            executor: "NoOpExecutor",
            ..
        }
    ));
}

#[tokio::test]
async fn test_deploy_receipt_json() {
    let chain = chain();
    let receipt = chain
        .get_contract_factory("TodoList")
        .unwrap()
        .deploy(&DEV_ACCOUNT, &encode_constructor("My Todos"))
        .await
        .unwrap();

    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["contract"], "TodoList");
    assert_eq!(json["address"], receipt.address.to_hex());
    assert_eq!(json["topoheight"], 1);
    assert!(json.get("logs").is_none());
}
