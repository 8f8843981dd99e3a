//! Character database insertion utilities.

use chrono::Utc;
use entity::character::Model as CharacterModel;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::character::CharacterFixtures};

impl<'a> CharacterFixtures<'a> {
    /// Insert a character row into the database.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the table is missing or the ID is taken
    pub async fn insert_mock_character(
        &self,
        id: &str,
        name: &str,
        ki: &str,
        race: &str,
    ) -> Result<CharacterModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                name: ActiveValue::Set(name.to_string()),
                ki: ActiveValue::Set(ki.to_string()),
                race: ActiveValue::Set(race.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
