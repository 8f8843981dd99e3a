//! Test fixture modules for database and HTTP mock creation.
//!
//! - `character` - stored character rows, catalog payloads and catalog endpoints

pub mod character;
