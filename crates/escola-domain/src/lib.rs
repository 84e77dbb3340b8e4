//! Domain types shared across all escola services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `handlers/`.

pub mod field;
pub mod kind;
pub mod reference;
