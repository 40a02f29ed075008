//! Database layer - connection pool, schema and repository
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>; a connection is held
//!   only for the duration of one statement
//! - One statement per operation (RETURNING instead of select-then-write)
//! - Schema created idempotently at startup, no migration tooling

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, open_in_memory};
pub use repos::*;
