//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Builder methods queue work that is executed in order by the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up database tables, stored characters, and mock catalog endpoints. Methods can be
/// chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert, (id, name, ki, race)
    characters: Vec<(String, String, String, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    collection_endpoints: Vec<(Vec<Value>, usize)>,
    character_endpoints: Vec<(String, Value, usize)>,
    character_not_found_endpoints: Vec<(String, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            characters: Vec::new(),
            mock_builders: Vec::new(),
            collection_endpoints: Vec::new(),
            character_endpoints: Vec::new(),
            character_not_found_endpoints: Vec::new(),
        }
    }

    /// Add an entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use capsule_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), capsule_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Character).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add the `characters` table to the test database.
    pub fn with_character_table(self) -> Self {
        self.with_table(entity::prelude::Character)
    }

    /// Insert a character row into the database during `build()`.
    ///
    /// The character table must be added as well, otherwise `build()` fails.
    pub fn with_stored_character(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        ki: impl Into<String>,
        race: impl Into<String>,
    ) -> Self {
        self.characters
            .push((id.into(), name.into(), ki.into(), race.into()));
        self
    }

    /// Add a mock `GET /characters` collection endpoint.
    ///
    /// # Arguments
    /// - `characters` - Character payloads returned in the collection's `items`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_collection_endpoint(
        mut self,
        characters: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.collection_endpoints
            .push((characters, expected_requests));
        self
    }

    /// Add a mock `GET /characters/{id}` endpoint returning the given payload.
    pub fn with_character_endpoint(
        mut self,
        id: impl Into<String>,
        character: Value,
        expected_requests: usize,
    ) -> Self {
        self.character_endpoints
            .push((id.into(), character, expected_requests));
        self
    }

    /// Add a mock `GET /characters/{id}` endpoint answering 404 Not Found.
    pub fn with_character_not_found_endpoint(
        mut self,
        id: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.character_not_found_endpoints
            .push((id.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    ///
    /// Use this for failure responses or payloads the helper methods don't cover.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts stored characters
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then the shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for (id, name, ki, race) in self.characters {
            setup
                .character()
                .insert_mock_character(&id, &name, &ki, &race)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so mockito matches them before the shortcuts
        // when a test registers several mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (characters, expected) in self.collection_endpoints {
            mocks.push(
                setup
                    .character()
                    .create_collection_endpoint(characters, expected),
            );
        }

        for (id, character, expected) in self.character_endpoints {
            mocks.push(
                setup
                    .character()
                    .create_character_endpoint(&id, character, expected),
            );
        }

        for (id, expected) in self.character_not_found_endpoints {
            mocks.push(
                setup
                    .character()
                    .create_character_not_found_endpoint(&id, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
