//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind small, purpose-named operations so services
//! never build queries themselves.

pub mod character;
