// TodoList Daemon Library
// Local chain hosting native contracts, used by the deploy tool and the testing framework

#![allow(clippy::type_complexity)]
#![allow(clippy::uninlined_format_args)]

extern crate log;

pub mod core;

// Native contract execution
pub mod native_integration;
