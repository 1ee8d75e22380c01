//! Chirp backend library: domain rules, HTTP adapters, and persistence.
//!
//! A small social-networking service. Users are created and listed, follow
//! and unfollow each other, and publish posts visible only to their
//! followers (or themselves). The decision logic lives in `domain`; `inbound`
//! and `outbound` hold the Actix and Diesel adapters on either side of it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
