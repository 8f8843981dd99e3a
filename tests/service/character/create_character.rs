//! Tests for CharacterService::create_character.
//!
//! These run the service with the SeaORM repository on an in-memory database and the HTTP
//! catalog client pointed at a mockito server, covering the stored, fetched, missing and
//! failure paths.

use capsule::server::data::character::CharacterStore;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect the stored character unchanged and no catalog request when the name is stored
#[tokio::test]
async fn returns_stored_character_without_catalog_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_stored_character("123", "Goku", "", "")
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("1", "Goku", "9000", "Saiyan")],
            0,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Goku").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.id, "123");
    assert_eq!(character.name, "Goku");
    assert_eq!(character.ki, "");
    assert_eq!(character.race, "");
    test.assert_mocks();

    Ok(())
}

/// Expect a case-insensitive match on the stored name to skip the catalog
#[tokio::test]
async fn matches_stored_name_case_insensitively() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_stored_character("123", "Goku", "9000", "Saiyan")
        .with_collection_endpoint(Vec::new(), 0)
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("gOkU").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().id, "123");
    test.assert_mocks();

    Ok(())
}

/// Expect the catalog character to be returned and stored when only the catalog has it
#[tokio::test]
async fn fetches_and_stores_character_from_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![
                factory::mock_catalog_character("1", "Goku", "9000", "Saiyan"),
                factory::mock_catalog_character("456", "Vegeta", "8000", "Saiyan"),
            ],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Vegeta").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.id, "456");
    assert_eq!(character.name, "Vegeta");
    assert_eq!(character.ki, "8000");
    assert_eq!(character.race, "Saiyan");

    let stored = store.find_by_name("Vegeta").await?;
    assert_eq!(stored, Some(character));

    let count = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(count, 1);
    test.assert_mocks();

    Ok(())
}

/// Expect numeric catalog identifiers to be stored as their exact digits
#[tokio::test]
async fn stores_numeric_catalog_id_as_string() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character(
                2,
                "Vegeta",
                "54.000.000",
                "Saiyan",
            )],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let character = service.create_character("Vegeta").await.unwrap();

    assert_eq!(character.id, "2");
    assert_eq!(character.ki, "54.000.000");
    test.assert_mocks();

    Ok(())
}

/// Expect the same id from two sequential calls with a single catalog request
#[tokio::test]
async fn second_call_is_served_from_database() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("456", "Vegeta", "8000", "Saiyan")],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let first = service.create_character("Vegeta").await.unwrap();
    let second = service.create_character("Vegeta").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

/// Expect NotFound and nothing stored when neither side has the name
#[tokio::test]
async fn returns_not_found_when_missing_everywhere() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("1", "Goku", "9000", "Saiyan")],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Krillin").await;

    assert!(matches!(result, Err(CharacterError::NotFound(ref name)) if name == "Krillin"));
    let count = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(count, 0);
    test.assert_mocks();

    Ok(())
}

/// Expect the catalog match to be case-sensitive
#[tokio::test]
async fn catalog_match_is_case_sensitive() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("456", "Vegeta", "8000", "Saiyan")],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("vegeta").await;

    assert!(matches!(result, Err(CharacterError::NotFound(_))));
    test.assert_mocks();

    Ok(())
}

/// Expect UpstreamFailure and nothing stored when the catalog answers with a server error
#[tokio::test]
async fn returns_upstream_failure_for_catalog_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/characters")
                .with_status(500)
                .with_body("API error")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Krillin").await;

    assert!(matches!(result, Err(CharacterError::UpstreamFailure(_))));
    let count = entity::prelude::Character::find().count(&test.db).await?;
    assert_eq!(count, 0);
    test.assert_mocks();

    Ok(())
}

/// Expect UpstreamFailure when the catalog payload cannot be decoded
#[tokio::test]
async fn returns_upstream_failure_for_malformed_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/characters")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("not json")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Krillin").await;

    assert!(matches!(result, Err(CharacterError::UpstreamFailure(_))));
    test.assert_mocks();

    Ok(())
}

/// Expect PersistenceFailure when the characters table is missing
#[tokio::test]
async fn returns_persistence_failure_without_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("456", "Vegeta", "8000", "Saiyan")],
            0,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let result = service.create_character("Vegeta").await;

    assert!(matches!(result, Err(CharacterError::PersistenceFailure(_))));
    test.assert_mocks();

    Ok(())
}

/// Expect a name with a non-ASCII capital to be served from the database on the second call
#[tokio::test]
async fn second_call_with_non_ascii_name_is_served_from_database() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_collection_endpoint(
            vec![factory::mock_catalog_character("77", "Ñandú", "100", "Bird")],
            1,
        )
        .build()
        .await?;

    let store = CharacterRepository::new(&test.db);
    let catalog = test.catalog_client();
    let service = CharacterService::new(&store, &catalog);

    let first = service.create_character("Ñandú").await.unwrap();
    let second = service.create_character("Ñandú").await.unwrap();

    assert_eq!(first.id, "77");
    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}
