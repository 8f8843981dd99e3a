use serde::{de, Deserialize, Deserializer};
use serde_json::value::RawValue;

/// A character as described by the upstream catalog.
///
/// Only the fields capsule stores are kept; anything else in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogCharacter {
    /// Catalog identifier, kept as the literal text the catalog sent
    #[serde(deserialize_with = "deserialize_catalog_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub ki: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub race: String,
}

/// Body of the collection endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogCharacterPage {
    pub items: Vec<CatalogCharacter>,
}

/// Deserializes an identifier that may arrive as a JSON string or a JSON number.
///
/// Numbers are read from their raw JSON text so large identifiers never pass through a
/// floating-point representation.
fn deserialize_catalog_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;

    parse_catalog_id(raw.get()).map_err(de::Error::custom)
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Converts the raw JSON text of a catalog identifier into its opaque string form.
///
/// # Returns
/// - `Ok(String)` - the string value for JSON strings, or the integer digits for JSON
///   numbers (`"12.0"` becomes `"12"`)
/// - `Err(String)` - empty strings, fractional or exponent numbers, and any other JSON type
///
/// Unlike keeping the literal number text, `12.0` is normalized to `"12"` so it matches the
/// row saved for `12`, and exponent forms such as `1e3` are rejected rather than stored as
/// typed.
pub fn parse_catalog_id(raw: &str) -> Result<String, String> {
    let raw = raw.trim();

    if raw.starts_with('"') {
        let id: String = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if id.is_empty() {
            return Err("catalog identifier is an empty string".to_string());
        }

        return Ok(id);
    }

    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw, None),
    };

    let digits = integer.strip_prefix('-').unwrap_or(integer);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "catalog identifier must be a string or an integer, got {}",
            raw
        ));
    }

    match fraction {
        None => Ok(integer.to_string()),
        Some(fraction) if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') => {
            Ok(integer.to_string())
        }
        Some(_) => Err(format!(
            "catalog identifier must not have a fractional part, got {}",
            raw
        )),
    }
}
