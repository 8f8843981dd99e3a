//! SeaORM entities for the capsule database.

pub mod prelude;

pub mod character;
