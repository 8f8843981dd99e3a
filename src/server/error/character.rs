use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, InternalServerError},
};

/// Failure kinds of the get-or-create character flow.
#[derive(Error, Debug)]
pub enum CharacterError {
    /// Neither the local database nor the catalog has a character with this name.
    #[error("Character '{0}' not found in the local database or the character catalog")]
    NotFound(String),
    /// The catalog could not be queried (transport, non-success status, malformed payload).
    #[error("Failed to fetch character from the character catalog: {0}")]
    UpstreamFailure(#[source] CatalogError),
    /// The local database failed to read or write the character.
    #[error("Failed to persist character: {0}")]
    PersistenceFailure(#[source] DbErr),
}

/// Maps character failures onto HTTP responses.
///
/// # Returns
/// - 404 Not Found - the character exists nowhere
/// - 502 Bad Gateway - the upstream catalog failed
/// - 500 Internal Server Error - the local database failed
impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(name) => {
                tracing::debug!(character_name = %name, "Character not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("Character '{}' not found", name),
                    }),
                )
                    .into_response()
            }
            Self::UpstreamFailure(err) => {
                tracing::error!(error = %err, "Character catalog request failed");

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to fetch character from the character catalog".to_string(),
                    }),
                )
                    .into_response()
            }
            err @ Self::PersistenceFailure(_) => InternalServerError(err).into_response(),
        }
    }
}
