//! Server application core modules.
//!
//! HTTP routing, the get-or-create character service, database access through SeaORM and
//! the client for the upstream character catalog.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
