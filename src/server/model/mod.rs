//! Server-side models: application state, database model aliases and the character
//! record handed from the catalog to the store.

pub mod app;
pub mod character;
pub mod db;
