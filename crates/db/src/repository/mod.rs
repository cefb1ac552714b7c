//! Repository functions — one function per database operation.
//!
//! Every function takes a `&mut SqliteConnection` so callers can run it on a
//! pooled connection or inside an open transaction, and returns a
//! `Result<T, DbError>`. No business logic, no domain types — pure SQL.

pub mod activities;
pub mod participants;
