//! Shared test harness for the capsule workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, stored characters
//! and mock catalog endpoints, then `build()` hands back a [`TestContext`] holding an
//! in-memory SQLite database and the mockito server standing in for the character catalog.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::character::factory, TestBuilder, TestContext, TestError};
}
