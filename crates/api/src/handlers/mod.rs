//! Request handlers and the state they share.

pub mod activities;

use db::DbPool;

/// Per-router state. Holds the store handle; no request data survives between calls.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
