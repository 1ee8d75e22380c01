//! Port abstraction for post persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Post, PostDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// Repository connection could not be established.
        Connection => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "post repository query failed: {message}",
    }
}

/// Port for storing posts and reading a user's timeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post for the given author and return the stored record.
    async fn insert(
        &self,
        author: UserId,
        draft: &PostDraft,
    ) -> Result<Post, PostPersistenceError>;

    /// List the posts owned by a user, newest first.
    async fn list_by_author(&self, author: UserId) -> Result<Vec<Post>, PostPersistenceError>;
}
