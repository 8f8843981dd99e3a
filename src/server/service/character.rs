use crate::server::{
    catalog::CatalogClient,
    data::character::CharacterStore,
    error::character::CharacterError,
    model::{character::NewCharacter, db::CharacterModel},
};

pub struct CharacterService<'a, S, C> {
    store: &'a S,
    catalog: &'a C,
}

impl<'a, S, C> CharacterService<'a, S, C>
where
    S: CharacterStore,
    C: CatalogClient,
{
    /// Creates a new instance of [`CharacterService`]
    pub fn new(store: &'a S, catalog: &'a C) -> Self {
        Self { store, catalog }
    }

    /// Get a character from the database by name, fetching & storing it from the catalog if missing
    ///
    /// A stored character always wins over the catalog; stored characters are never
    /// refreshed. The catalog is only asked when the database has no match, and a catalog
    /// hit is returned only once it has been saved.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)` - the stored character, or the catalog character after saving it
    /// - `Err(CharacterError::NotFound)` - neither the database nor the catalog has the name
    /// - `Err(CharacterError::UpstreamFailure)` - the catalog request failed, nothing was saved
    /// - `Err(CharacterError::PersistenceFailure)` - reading or saving in the database failed
    pub async fn create_character(&self, name: &str) -> Result<CharacterModel, CharacterError> {
        tracing::info!(character_name = %name, "Attempting to create or retrieve character");

        let existing = self
            .store
            .find_by_name(name)
            .await
            .map_err(CharacterError::PersistenceFailure)?;

        if let Some(character) = existing {
            tracing::info!(
                character_name = %name,
                character_id = %character.id,
                "Character found in local database"
            );
            return Ok(character);
        }

        tracing::info!(
            character_name = %name,
            "Character not found in local database, fetching from character catalog"
        );

        let fetched = match self.catalog.find_by_name(name).await {
            Ok(Some(character)) => character,
            Ok(None) => {
                tracing::warn!(character_name = %name, "Character not found in character catalog");
                return Err(CharacterError::NotFound(name.to_string()));
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    character_name = %name,
                    "Failed to fetch character from character catalog"
                );
                return Err(CharacterError::UpstreamFailure(err));
            }
        };

        let new_character = NewCharacter::from(fetched);
        let character = self.store.save(new_character).await.map_err(|err| {
            tracing::error!(
                error = %err,
                character_name = %name,
                "Failed to save character to database"
            );
            CharacterError::PersistenceFailure(err)
        })?;

        tracing::info!(
            character_name = %character.name,
            character_id = %character.id,
            "Successfully fetched and saved character"
        );

        Ok(character)
    }
}
