//! Todo item storage
//!
//! This crate provides a storage abstraction for todo items. Items can live
//! in process memory (lost on shutdown) or in a single SQL table, either
//! PostgreSQL or SQLite.

mod backend;
mod entities;
mod error;
mod memory;
mod sql;
mod store;

pub use backend::*;
pub use entities::*;
pub use error::*;
pub use memory::*;
pub use sql::*;
pub use store::*;
