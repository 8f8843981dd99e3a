//! Capsule serves characters from a local database, falling back to an upstream
//! character catalog and caching whatever it finds there.

pub mod model;
pub mod server;
