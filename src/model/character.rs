use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for getting or creating a character by name
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    /// Name of the character, looked up case-insensitively in the local database
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    /// Identifier assigned by the upstream catalog
    pub id: String,
    pub name: String,
    pub ki: String,
    pub race: String,
    /// When the character was first stored, RFC 3339 in UTC
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
