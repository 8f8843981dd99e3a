use serde_json::{json, Value};

/// Create a catalog character payload as the catalog serves it.
///
/// Includes fields capsule does not store so tests also cover ignoring unknown fields.
///
/// # Arguments
/// - `id` - Identifier, either a JSON string or a JSON number
/// - `name` - Character name
/// - `ki` - Power level text
/// - `race` - Race text
///
/// # Returns
/// - `Value` - JSON object for a single character
pub fn mock_catalog_character(id: impl Into<Value>, name: &str, ki: &str, race: &str) -> Value {
    json!({
        "id": id.into(),
        "name": name,
        "ki": ki,
        "maxKi": "90 Septillion",
        "race": race,
        "gender": "Male",
        "description": "string",
        "image": "https://example.com/character.webp",
        "affiliation": "Z Fighter",
        "deletedAt": null
    })
}

/// Wrap character payloads in the collection envelope served by `/characters`.
///
/// # Returns
/// - `Value` - JSON object with `items`, `meta` and `links`
pub fn mock_catalog_page(items: Vec<Value>) -> Value {
    let total = items.len();

    json!({
        "items": items,
        "meta": {
            "totalItems": total,
            "itemCount": total,
            "itemsPerPage": 10,
            "totalPages": 1,
            "currentPage": 1
        },
        "links": {
            "first": "/api/characters?limit=10",
            "previous": "",
            "next": "",
            "last": "/api/characters?page=1&limit=10"
        }
    })
}
