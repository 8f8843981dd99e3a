use sea_orm::DbErr;

use super::*;

/// Expect Ok with the stored character and no catalog call when the name is stored
#[tokio::test]
async fn returns_stored_character_without_catalog_call() {
    let stored = stored_character("123", "Goku", "", "");
    let expected = stored.clone();

    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .withf(|name: &str| name == "Goku")
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));
    store.expect_save().never();

    let mut catalog = MockCatalogClient::new();
    catalog.expect_find_by_name().never();
    catalog.expect_find_by_id().never();

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Goku").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), expected);
}

/// Expect Ok with the catalog fields and exactly one save when the name is only in the catalog
#[tokio::test]
async fn fetches_and_saves_character_from_catalog() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .withf(|name: &str| name == "Vegeta")
        .times(1)
        .returning(|_| Ok(None));
    store
        .expect_save()
        .withf(|character: &NewCharacter| {
            character.id == "456"
                && character.name == "Vegeta"
                && character.ki == "8000"
                && character.race == "Saiyan"
        })
        .times(1)
        .returning(|character| Ok(saved(character)));

    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_find_by_name()
        .withf(|name: &str| name == "Vegeta")
        .times(1)
        .returning(|_| Ok(Some(catalog_character("456", "Vegeta", "8000", "Saiyan"))));

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Vegeta").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.id, "456");
    assert_eq!(character.name, "Vegeta");
    assert_eq!(character.ki, "8000");
    assert_eq!(character.race, "Saiyan");
}

/// Expect NotFound and no save when neither the store nor the catalog has the name
#[tokio::test]
async fn returns_not_found_when_missing_everywhere() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .times(1)
        .returning(|_| Ok(None));
    store.expect_save().never();

    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_find_by_name()
        .withf(|name: &str| name == "Krillin")
        .times(1)
        .returning(|_| Ok(None));

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Krillin").await;

    match result {
        Err(CharacterError::NotFound(name)) => assert_eq!(name, "Krillin"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// Expect UpstreamFailure and no save when the catalog request fails
#[tokio::test]
async fn returns_upstream_failure_when_catalog_errors() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .times(1)
        .returning(|_| Ok(None));
    store.expect_save().never();

    let mut catalog = MockCatalogClient::new();
    catalog.expect_find_by_name().times(1).returning(|_| {
        Err(CatalogError::Status {
            status: 500,
            body: "API error".to_string(),
        })
    });

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Krillin").await;

    assert!(matches!(result, Err(CharacterError::UpstreamFailure(_))));
    let err = result.unwrap_err();
    assert!(err
        .to_string()
        .contains("Failed to fetch character from the character catalog"));
}

/// Expect PersistenceFailure when saving the fetched character fails
#[tokio::test]
async fn returns_persistence_failure_when_save_errors() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .times(1)
        .returning(|_| Ok(None));
    store
        .expect_save()
        .times(1)
        .returning(|_| Err(DbErr::Custom("DB save error".to_string())));

    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_find_by_name()
        .times(1)
        .returning(|_| Ok(Some(catalog_character("789", "Piccolo", "", ""))));

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Piccolo").await;

    assert!(matches!(result, Err(CharacterError::PersistenceFailure(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to persist character"));
}

/// Expect PersistenceFailure and no catalog call when the store lookup fails
#[tokio::test]
async fn returns_persistence_failure_when_lookup_errors() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .times(1)
        .returning(|_| Err(DbErr::Custom("connection reset".to_string())));
    store.expect_save().never();

    let mut catalog = MockCatalogClient::new();
    catalog.expect_find_by_name().never();

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Goku").await;

    assert!(matches!(result, Err(CharacterError::PersistenceFailure(_))));
}

/// Expect the name to be forwarded unchanged to both the store and the catalog
#[tokio::test]
async fn forwards_name_verbatim() {
    let mut store = MockCharacterStore::new();
    store
        .expect_find_by_name()
        .withf(|name: &str| name == "Master Roshi")
        .times(1)
        .returning(|_| Ok(None));
    store.expect_save().never();

    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_find_by_name()
        .withf(|name: &str| name == "Master Roshi")
        .times(1)
        .returning(|_| Ok(None));

    let service = CharacterService::new(&store, &catalog);
    let result = service.create_character("Master Roshi").await;

    assert!(matches!(result, Err(CharacterError::NotFound(_))));
}
