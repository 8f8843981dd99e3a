//! Character catalog mock endpoint creation utilities.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::TEST_CATALOG_PATH,
    fixtures::character::{factory::mock_catalog_page, CharacterFixtures},
};

impl<'a> CharacterFixtures<'a> {
    /// Create a mock `GET /characters` endpoint returning the given characters.
    ///
    /// # Arguments
    /// - `characters` - Character payloads wrapped into the collection envelope
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_collection_endpoint(
        &mut self,
        characters: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/characters", TEST_CATALOG_PATH);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_catalog_page(characters).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /characters/{id}` endpoint returning a single character.
    pub fn create_character_endpoint(
        &mut self,
        id: &str,
        character: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/characters/{}", TEST_CATALOG_PATH, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(character.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /characters/{id}` endpoint answering 404 Not Found.
    pub fn create_character_not_found_endpoint(
        &mut self,
        id: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/characters/{}", TEST_CATALOG_PATH, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Character not found","error":"Not Found","statusCode":404}"#)
            .expect(expected_requests)
            .create()
    }
}
