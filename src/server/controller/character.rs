use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        data::character::CharacterRepository, error::Error, model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Get a character by name, fetching it from the character catalog if it isn't stored yet
///
/// Returns 201 Created for both stored and freshly fetched characters.
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character retrieved or created", body = CharacterDto),
        (status = 400, description = "Character name is empty", body = ErrorDto),
        (status = 404, description = "Character not found in the database or the catalog", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 502, description = "Character catalog request failed", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let name = payload.name.trim();

    if name.is_empty() {
        tracing::warn!("Rejected create character request with an empty name");

        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Character name must not be empty".to_string(),
            }),
        )
            .into_response());
    }

    let character_repository = CharacterRepository::new(&state.db);
    let character_service = CharacterService::new(&character_repository, &state.catalog_client);

    let character = character_service.create_character(name).await?;

    let character_dto = CharacterDto {
        id: character.id,
        name: character.name,
        ki: character.ki,
        race: character.race,
        created_at: character.created_at.and_utc(),
        updated_at: character.updated_at.and_utc(),
    };

    Ok((StatusCode::CREATED, Json(character_dto)).into_response())
}
