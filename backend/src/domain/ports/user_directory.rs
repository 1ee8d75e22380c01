//! Driving port for user registration and listing.
//!
//! Inbound adapters (HTTP handlers) use this port without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft};

/// Domain use-case port for creating and listing users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a new user and return the stored profile.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Return every registered user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
