//! TodoList Contract
//!
//! A named, append-only list of todos. Each todo carries free-text content
//! and a completion flag, and is addressed by a sequential zero-based id.
//!
//! # Instruction Format
//!
//! All instructions follow the format: `[opcode:1][params:N]`
//!
//! ## Opcodes
//!
//! - 0x00: UpdateName - `[name:string]`
//! - 0x01: CreateTodo - `[content:string]`, returns `[id:u64]`
//! - 0x02: UpdateTodo - `[id:u64][content:string][is_completed:bool]`
//! - 0x03: ToggleCompletedById - `[id:u64]`, returns `[is_completed:bool]`
//! - 0x10: Name - `` (query), returns `[name:string]`
//! - 0x11: GetAllTodos - `` (query), returns `[count:u64][Todo]*`
//! - 0x12: GetTodoById - `[id:u64]` (query), returns `[Todo]`
//! - 0x13: TodoCount - `` (query), returns `[count:u64]`
//!
//! The constructor takes `[name:string]`.
//!
//! # Storage Layout
//!
//! - `name` - [0x01] -> UTF-8 bytes
//! - `count` - [0x02] -> u64
//! - `todos` - [0x03][id:u64] -> Todo
//! - `list_size` - [0x04] -> u64, encoded size of all todos
//!
//! `list_size` keeps the whole list returnable by GetAllTodos: a create or
//! update that would push the encoded list past the host return data limit
//! reverts with 1004.
//!
//! # Error Codes
//!
//! - 1001: Invalid instruction
//! - 1002: Invalid parameters
//! - 1003: Todo not found
//! - 1004: Storage failure

use todo_common::{
    config::{MAX_RETURN_DATA_SIZE, SUCCESS},
    contract::{ContractRuntime, NativeContract},
    crypto::{hash, Hash, HASH_SIZE},
    serializer::{Reader, Serializer, Writer},
    todo::{Todo, TodoId},
};

// ============================================================================
// Constants
// ============================================================================

/// Contract name used for registry lookups
pub const CONTRACT_NAME: &str = "TodoList";

/// Code identifier hashed into deployment addresses
const CONTRACT_CODE: &[u8] = b"TodoList/v1";

/// Storage keys
const KEY_NAME: u8 = 0x01;
const KEY_COUNT: u8 = 0x02;
const KEY_TODO_PREFIX: u8 = 0x03;
const KEY_LIST_SIZE: u8 = 0x04;

/// Count prefix of an encoded todo list
const LIST_HEADER_SIZE: u64 = 8;

/// Instruction opcodes
pub const OP_UPDATE_NAME: u8 = 0x00;
pub const OP_CREATE_TODO: u8 = 0x01;
pub const OP_UPDATE_TODO: u8 = 0x02;
pub const OP_TOGGLE_COMPLETED: u8 = 0x03;
pub const OP_NAME: u8 = 0x10;
pub const OP_GET_ALL_TODOS: u8 = 0x11;
pub const OP_GET_TODO_BY_ID: u8 = 0x12;
pub const OP_TODO_COUNT: u8 = 0x13;

/// Error codes
pub const ERR_INVALID_INSTRUCTION: u64 = 1001;
pub const ERR_INVALID_PARAMS: u64 = 1002;
pub const ERR_TODO_NOT_FOUND: u64 = 1003;
pub const ERR_STORAGE: u64 = 1004;

/// Event signatures, hashed into topic[0]
pub const EVENT_NAME_UPDATED: &str = "NameUpdated(string)";
pub const EVENT_TODO_CREATED: &str = "TodoCreated(uint64,string)";
pub const EVENT_TODO_UPDATED: &str = "TodoUpdated(uint64,string,bool)";
pub const EVENT_TODO_TOGGLED: &str = "TodoToggled(uint64,bool)";

type OpResult<T> = Result<T, u64>;

// ============================================================================
// Instruction Encoding
// ============================================================================

/// Build the constructor params for a list called `name`
pub fn encode_constructor(name: &str) -> Vec<u8> {
    let mut writer = Writer::new();
    writer.write_string(name);
    writer.bytes()
}

/// Calls understood by the contract entrypoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    UpdateName { name: String },
    CreateTodo { content: String },
    UpdateTodo {
        id: TodoId,
        content: String,
        is_completed: bool,
    },
    ToggleCompletedById { id: TodoId },
    Name,
    GetAllTodos,
    GetTodoById { id: TodoId },
    TodoCount,
}

impl Instruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::UpdateName { .. } => OP_UPDATE_NAME,
            Instruction::CreateTodo { .. } => OP_CREATE_TODO,
            Instruction::UpdateTodo { .. } => OP_UPDATE_TODO,
            Instruction::ToggleCompletedById { .. } => OP_TOGGLE_COMPLETED,
            Instruction::Name => OP_NAME,
            Instruction::GetAllTodos => OP_GET_ALL_TODOS,
            Instruction::GetTodoById { .. } => OP_GET_TODO_BY_ID,
            Instruction::TodoCount => OP_TODO_COUNT,
        }
    }

    /// Encode as `[opcode][params]` call data
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.write_u8(self.opcode());
        match self {
            Instruction::UpdateName { name } => writer.write_string(name),
            Instruction::CreateTodo { content } => writer.write_string(content),
            Instruction::UpdateTodo {
                id,
                content,
                is_completed,
            } => {
                writer.write_u64(*id);
                writer.write_string(content);
                writer.write_bool(*is_completed);
            }
            Instruction::ToggleCompletedById { id } | Instruction::GetTodoById { id } => {
                writer.write_u64(*id)
            }
            Instruction::Name | Instruction::GetAllTodos | Instruction::TodoCount => {}
        }
        writer.bytes()
    }

    /// Decode call data, returning the contract error code on failure
    pub fn decode(input: &[u8]) -> OpResult<Self> {
        let (opcode, params) = input.split_first().ok_or(ERR_INVALID_INSTRUCTION)?;
        let mut reader = Reader::new(params);

        let instruction = match *opcode {
            OP_UPDATE_NAME => Instruction::UpdateName {
                name: reader.read_string().map_err(|_| ERR_INVALID_PARAMS)?,
            },
            OP_CREATE_TODO => Instruction::CreateTodo {
                content: reader.read_string().map_err(|_| ERR_INVALID_PARAMS)?,
            },
            OP_UPDATE_TODO => {
                let id = reader.read_u64().map_err(|_| ERR_INVALID_PARAMS)?;
                let content = reader.read_string().map_err(|_| ERR_INVALID_PARAMS)?;
                let is_completed = reader.read_bool().map_err(|_| ERR_INVALID_PARAMS)?;
                Instruction::UpdateTodo {
                    id,
                    content,
                    is_completed,
                }
            }
            OP_TOGGLE_COMPLETED => Instruction::ToggleCompletedById {
                id: reader.read_u64().map_err(|_| ERR_INVALID_PARAMS)?,
            },
            OP_NAME => Instruction::Name,
            OP_GET_ALL_TODOS => Instruction::GetAllTodos,
            OP_GET_TODO_BY_ID => Instruction::GetTodoById {
                id: reader.read_u64().map_err(|_| ERR_INVALID_PARAMS)?,
            },
            OP_TODO_COUNT => Instruction::TodoCount,
            _ => return Err(ERR_INVALID_INSTRUCTION),
        };

        if reader.size() != 0 {
            return Err(ERR_INVALID_PARAMS);
        }

        Ok(instruction)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn todo_key(id: TodoId) -> [u8; 9] {
    let mut key = [0u8; 9];
    key[0] = KEY_TODO_PREFIX;
    key[1..].copy_from_slice(&id.to_be_bytes());
    key
}

/// Indexed topic carrying a todo id (big-endian in the last 8 bytes)
pub fn id_topic(id: TodoId) -> Hash {
    let mut bytes = [0u8; HASH_SIZE];
    bytes[HASH_SIZE - 8..].copy_from_slice(&id.to_be_bytes());
    Hash::new(bytes)
}

fn read(runtime: &dyn ContractRuntime, key: &[u8]) -> OpResult<Option<Vec<u8>>> {
    runtime.storage_read(key).map_err(|_| ERR_STORAGE)
}

fn get_name(runtime: &dyn ContractRuntime) -> OpResult<String> {
    match read(runtime, &[KEY_NAME])? {
        Some(bytes) => String::from_utf8(bytes).map_err(|_| ERR_STORAGE),
        None => Ok(String::new()),
    }
}

fn set_name(runtime: &mut dyn ContractRuntime, name: &str) -> OpResult<()> {
    runtime
        .storage_write(&[KEY_NAME], name.as_bytes())
        .map_err(|_| ERR_STORAGE)
}

/// Number of todos, 0 if none was ever created
fn get_count(runtime: &dyn ContractRuntime) -> OpResult<u64> {
    match read(runtime, &[KEY_COUNT])? {
        Some(bytes) => u64::from_bytes(&bytes).map_err(|_| ERR_STORAGE),
        None => Ok(0),
    }
}

fn set_count(runtime: &mut dyn ContractRuntime, count: u64) -> OpResult<()> {
    runtime
        .storage_write(&[KEY_COUNT], &count.to_bytes())
        .map_err(|_| ERR_STORAGE)
}

fn get_todo(runtime: &dyn ContractRuntime, id: TodoId) -> OpResult<Todo> {
    if id >= get_count(runtime)? {
        return Err(ERR_TODO_NOT_FOUND);
    }

    let bytes = read(runtime, &todo_key(id))?.ok_or(ERR_STORAGE)?;
    Todo::from_bytes(&bytes).map_err(|_| ERR_STORAGE)
}

fn set_todo(runtime: &mut dyn ContractRuntime, id: TodoId, todo: &Todo) -> OpResult<()> {
    runtime
        .storage_write(&todo_key(id), &todo.to_bytes())
        .map_err(|_| ERR_STORAGE)
}

fn get_list_size(runtime: &dyn ContractRuntime) -> OpResult<u64> {
    match read(runtime, &[KEY_LIST_SIZE])? {
        Some(bytes) => u64::from_bytes(&bytes).map_err(|_| ERR_STORAGE),
        None => Ok(0),
    }
}

fn set_list_size(runtime: &mut dyn ContractRuntime, size: u64) -> OpResult<()> {
    runtime
        .storage_write(&[KEY_LIST_SIZE], &size.to_bytes())
        .map_err(|_| ERR_STORAGE)
}

/// Encoded size of all todos once a todo of `removed` bytes becomes `added` bytes
///
/// Fails if GetAllTodos could no longer return the whole list.
fn resize_list(runtime: &mut dyn ContractRuntime, removed: usize, added: usize) -> OpResult<u64> {
    let size = get_list_size(runtime)?
        .saturating_sub(removed as u64)
        .saturating_add(added as u64);

    if size.saturating_add(LIST_HEADER_SIZE) > MAX_RETURN_DATA_SIZE as u64 {
        runtime.log("TodoList: List full");
        return Err(ERR_STORAGE);
    }

    Ok(size)
}

fn emit(
    runtime: &mut dyn ContractRuntime,
    signature: &str,
    id: Option<TodoId>,
    data: Writer,
) -> OpResult<()> {
    let mut topics = vec![hash(signature.as_bytes())];
    if let Some(id) = id {
        topics.push(id_topic(id));
    }
    runtime
        .emit_event(topics, data.bytes())
        .map_err(|_| ERR_STORAGE)
}

fn set_return<T: Serializer>(runtime: &mut dyn ContractRuntime, value: &T) -> OpResult<()> {
    runtime
        .set_return_data(&value.to_bytes())
        .map_err(|_| ERR_STORAGE)
}

// ============================================================================
// Core Operations
// ============================================================================

fn op_update_name(runtime: &mut dyn ContractRuntime, name: String) -> OpResult<()> {
    runtime.log("TodoList: UpdateName");
    set_name(runtime, &name)?;

    let mut data = Writer::new();
    data.write_string(&name);
    emit(runtime, EVENT_NAME_UPDATED, None, data)
}

/// Append a new, not completed, todo
fn op_create_todo(runtime: &mut dyn ContractRuntime, content: String) -> OpResult<()> {
    runtime.log("TodoList: CreateTodo");

    let id = get_count(runtime)?;
    let next = id.checked_add(1).ok_or(ERR_STORAGE)?;

    let todo = Todo::new(content);
    let list_size = resize_list(runtime, 0, todo.size())?;
    set_todo(runtime, id, &todo)?;
    set_count(runtime, next)?;
    set_list_size(runtime, list_size)?;

    let mut data = Writer::new();
    data.write_string(&todo.content);
    emit(runtime, EVENT_TODO_CREATED, Some(id), data)?;

    set_return(runtime, &id)
}

fn op_update_todo(
    runtime: &mut dyn ContractRuntime,
    id: TodoId,
    content: String,
    is_completed: bool,
) -> OpResult<()> {
    runtime.log("TodoList: UpdateTodo");

    // Reject unknown ids before overwriting anything
    let previous = get_todo(runtime, id)?;

    let todo = Todo {
        content,
        is_completed,
    };
    let list_size = resize_list(runtime, previous.size(), todo.size())?;
    set_todo(runtime, id, &todo)?;
    set_list_size(runtime, list_size)?;

    let mut data = Writer::new();
    todo.write(&mut data);
    emit(runtime, EVENT_TODO_UPDATED, Some(id), data)
}

fn op_toggle_completed(runtime: &mut dyn ContractRuntime, id: TodoId) -> OpResult<()> {
    runtime.log("TodoList: ToggleCompletedById");

    let mut todo = get_todo(runtime, id)?;
    todo.is_completed = !todo.is_completed;
    set_todo(runtime, id, &todo)?;

    let mut data = Writer::new();
    data.write_bool(todo.is_completed);
    emit(runtime, EVENT_TODO_TOGGLED, Some(id), data)?;

    set_return(runtime, &todo.is_completed)
}

// ============================================================================
// Query Operations
// ============================================================================

fn op_name(runtime: &mut dyn ContractRuntime) -> OpResult<()> {
    runtime.log("TodoList: Name query");
    let name = get_name(runtime)?;
    set_return(runtime, &name)
}

fn op_get_all_todos(runtime: &mut dyn ContractRuntime) -> OpResult<()> {
    runtime.log("TodoList: GetAllTodos query");

    let count = get_count(runtime)?;
    let mut todos = Vec::new();
    for id in 0..count {
        todos.push(get_todo(runtime, id)?);
    }

    set_return(runtime, &todos)
}

fn op_get_todo_by_id(runtime: &mut dyn ContractRuntime, id: TodoId) -> OpResult<()> {
    runtime.log("TodoList: GetTodoById query");
    let todo = get_todo(runtime, id)?;
    set_return(runtime, &todo)
}

fn op_todo_count(runtime: &mut dyn ContractRuntime) -> OpResult<()> {
    runtime.log("TodoList: TodoCount query");
    let count = get_count(runtime)?;
    set_return(runtime, &count)
}

// ============================================================================
// Main Entrypoint
// ============================================================================

fn exit_code(result: OpResult<()>) -> u64 {
    match result {
        Ok(()) => SUCCESS,
        Err(code) => code,
    }
}

/// The TodoList contract
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoList;

impl NativeContract for TodoList {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn code(&self) -> &'static [u8] {
        CONTRACT_CODE
    }

    fn constructor(&self, runtime: &mut dyn ContractRuntime, params: &[u8]) -> u64 {
        runtime.log("TodoList: Initializing");

        let name = match String::from_bytes(params) {
            Ok(name) => name,
            Err(_) => {
                runtime.log("TodoList: Invalid constructor parameters");
                return ERR_INVALID_PARAMS;
            }
        };

        exit_code(set_name(runtime, &name))
    }

    /// Dispatches to the appropriate operation based on the opcode
    fn entrypoint(&self, runtime: &mut dyn ContractRuntime, input: &[u8]) -> u64 {
        let instruction = match Instruction::decode(input) {
            Ok(instruction) => instruction,
            Err(code) => {
                runtime.log("TodoList: Unable to decode instruction");
                return code;
            }
        };

        let result = match instruction {
            Instruction::UpdateName { name } => op_update_name(runtime, name),
            Instruction::CreateTodo { content } => op_create_todo(runtime, content),
            Instruction::UpdateTodo {
                id,
                content,
                is_completed,
            } => op_update_todo(runtime, id, content, is_completed),
            Instruction::ToggleCompletedById { id } => op_toggle_completed(runtime, id),
            Instruction::Name => op_name(runtime),
            Instruction::GetAllTodos => op_get_all_todos(runtime),
            Instruction::GetTodoById { id } => op_get_todo_by_id(runtime, id),
            Instruction::TodoCount => op_todo_count(runtime),
        };

        if let Err(code) = result {
            match code {
                ERR_TODO_NOT_FOUND => runtime.log("TodoList: Todo not found"),
                ERR_STORAGE => runtime.log("TodoList: Storage failure"),
                _ => {}
            }
        }

        exit_code(result)
    }
}
