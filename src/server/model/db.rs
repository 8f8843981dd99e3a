//! Database model type aliases.

/// Type alias for the character database model.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key, identifier assigned by the upstream catalog
/// - `name` - Character name, looked up case-insensitively
/// - `ki` - Free-form ki value, may be empty
/// - `race` - Free-form race, may be empty
/// - `created_at` - Timestamp when the character was first stored
/// - `updated_at` - Timestamp of the last save
pub type CharacterModel = entity::character::Model;
