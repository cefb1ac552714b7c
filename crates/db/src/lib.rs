//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, embedded migrations, typed row structs, and
//! repository functions for the `activity` and `participant` tables.
//! No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
