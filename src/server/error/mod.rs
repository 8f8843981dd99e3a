//! Error types for the capsule server.
//!
//! Each area of the server owns an error enum (catalog, character orchestration,
//! configuration). The aggregate [`Error`] wraps them together with the external library
//! errors that surface during startup, and every error maps onto an HTTP response through
//! `IntoResponse` so handlers can simply use `?`.

pub mod catalog;
pub mod character;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, character::CharacterError, config::ConfigError},
};

/// Main error type for the capsule server.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts domain and library errors
/// automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Get-or-create character failure, already classified by kind.
    #[error(transparent)]
    CharacterError(#[from] CharacterError),
    /// Catalog client error outside of the character flow (e.g. building the client).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error (connection, migration or query failure).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps errors onto HTTP responses.
///
/// Character errors carry their own status mapping; everything else is treated as an
/// internal server error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CharacterError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details are not
/// leaked to API consumers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
