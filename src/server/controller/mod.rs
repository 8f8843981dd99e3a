//! HTTP controller endpoints for the capsule web API.
//!
//! Controllers validate request input, hand off to the services, and map results onto
//! HTTP responses. Endpoints are documented for OpenAPI with utoipa.

pub mod character;
