use crate::server::catalog::CatalogCharacter;

/// Character fields written on save; timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCharacter {
    pub id: String,
    pub name: String,
    pub ki: String,
    pub race: String,
}

impl From<CatalogCharacter> for NewCharacter {
    fn from(character: CatalogCharacter) -> Self {
        Self {
            id: character.id,
            name: character.name,
            ki: character.ki,
            race: character.race,
        }
    }
}
