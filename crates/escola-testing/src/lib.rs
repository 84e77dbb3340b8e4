//! Test utilities for escola services.
//!
//! Provides `FakeRegistry` (in-process `ReferenceValidator`) and
//! `MockRegistryServer` (a real HTTP registry stand-in on an ephemeral port).
//! Import from tests only; never in production code.

pub mod fake_registry;
pub mod registry_server;
