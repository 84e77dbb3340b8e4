//! Shared HTTP plumbing for the escola services.

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod ledger;
pub mod middleware;
pub mod serde;
pub mod tracing;
