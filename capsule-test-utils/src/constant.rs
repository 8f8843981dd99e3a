//! Constant values shared by tests that talk to the mock character catalog.

/// User agent sent by test catalog clients.
pub static TEST_USER_AGENT: &str = "capsule-test/1.0 (+https://github.com/autumn-order/capsule)";

/// Path prefix the mock catalog is served under, mirroring the real catalog's `/api` base.
pub static TEST_CATALOG_PATH: &str = "/api";
