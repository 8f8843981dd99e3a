use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, OnConflict},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{character::NewCharacter, db::CharacterModel};

/// Persistence operations the character service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Insert the character, or overwrite its name, ki & race if the ID already exists
    ///
    /// # Returns
    /// - `Ok(CharacterModel)` - the row as stored, including server-assigned timestamps
    /// - `Err(DbErr)` - the database failed
    async fn save(&self, character: NewCharacter) -> Result<CharacterModel, DbErr>;

    /// Find a character by name, ignoring case
    ///
    /// Both sides are folded by the database's `lower()`, so a name always matches its own
    /// stored spelling even where the database only folds ASCII.
    ///
    /// Names are not unique; when several rows match, the oldest one is returned.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterModel))` - a matching row exists
    /// - `Ok(None)` - no row matches
    /// - `Err(DbErr)` - the database failed
    async fn find_by_name(&self, name: &str) -> Result<Option<CharacterModel>, DbErr>;
}

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> CharacterStore for CharacterRepository<'a> {
    async fn save(&self, character: NewCharacter) -> Result<CharacterModel, DbErr> {
        let character_id = character.id.clone();
        let now = Utc::now().naive_utc();

        let active_model = entity::character::ActiveModel {
            id: ActiveValue::Set(character.id),
            name: ActiveValue::Set(character.name),
            ki: ActiveValue::Set(character.ki),
            race: ActiveValue::Set(character.race),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let result = entity::prelude::Character::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::character::Column::Id)
                    .update_columns([
                        entity::character::Column::Name,
                        entity::character::Column::Ki,
                        entity::character::Column::Race,
                        entity::character::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await;

        if let Err(err) = result {
            tracing::error!(
                error = %err,
                character_id = %character_id,
                "Failed to save character to database"
            );
            return Err(err);
        }

        let saved = entity::prelude::Character::find_by_id(character_id.clone())
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "character {} missing right after being saved",
                    character_id
                ))
            })?;

        tracing::info!(character_id = %saved.id, "Character saved successfully to database");

        Ok(saved)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CharacterModel>, DbErr> {
        let result = entity::prelude::Character::find()
            .filter(
                Func::lower(Expr::col(entity::character::Column::Name))
                    .eq(Func::lower(Expr::val(name))),
            )
            .order_by_asc(entity::character::Column::CreatedAt)
            .order_by_asc(entity::character::Column::Id)
            .one(self.db)
            .await;

        match result {
            Ok(Some(character)) => {
                tracing::info!(
                    character_name = %name,
                    character_id = %character.id,
                    "Character found in database by name"
                );
                Ok(Some(character))
            }
            Ok(None) => {
                tracing::info!(character_name = %name, "Character not found in database by name");
                Ok(None)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    character_name = %name,
                    "Failed to query character by name from database"
                );
                Err(err)
            }
        }
    }
}
