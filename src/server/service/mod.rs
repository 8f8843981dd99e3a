//! Service layer.
//!
//! Services hold the business logic and coordinate repositories with the upstream
//! character catalog.

pub mod character;
