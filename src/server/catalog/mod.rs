//! Read-only client for the upstream character catalog.
//!
//! The catalog is an HTTP JSON API with a collection endpoint (`GET {base}/characters`)
//! and a by-id endpoint (`GET {base}/characters/{id}`). It cannot filter by name, so name
//! lookups download the collection and match client-side.

pub mod client;
pub mod config;
pub mod model;


use async_trait::async_trait;

pub use client::HttpCatalogClient;
pub use config::CatalogConfig;
pub use model::CatalogCharacter;

use crate::server::error::catalog::CatalogError;

/// Lookups against the upstream character catalog.
///
/// Both operations return `Ok(None)` when the catalog does not know the character and
/// reserve `Err` for transport failures, unexpected statuses and malformed payloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Find a character by exact, case-sensitive name; the first match in the collection wins.
    async fn find_by_name(&self, name: &str) -> Result<Option<CatalogCharacter>, CatalogError>;

    /// Find a character by its catalog identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogCharacter>, CatalogError>;
}
