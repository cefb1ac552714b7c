//! `registrar` crate — activity catalog, student signups, and bootstrap seeding.

pub mod models;
pub mod error;
pub mod service;
pub mod seed;

pub use models::{ActivitySummary, Confirmation, Roster};
pub use error::RegistrarError;
pub use service::{list_activities, signup, unregister};
pub use seed::seed_if_empty;
