use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn character<'a>(&'a mut self) -> CharacterFixtures<'a> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    pub setup: &'a mut TestContext,
}
