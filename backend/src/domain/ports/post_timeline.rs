//! Driving port for the post-visibility rules.

use async_trait::async_trait;

use crate::domain::{Error, Post, PostDraft, UserId};

/// Domain use-case port for publishing posts and reading a user's timeline.
#[async_trait]
pub trait PostTimeline: Send + Sync {
    /// Publish a new post owned by `owner`.
    async fn create_post(&self, owner: UserId, draft: PostDraft) -> Result<Post, Error>;

    /// List the posts owned by `target`, subject to the visibility rules.
    ///
    /// `requester` is the identity asserted by the caller; `None` means no
    /// identity was supplied at all.
    async fn list_visible_posts(
        &self,
        target: UserId,
        requester: Option<UserId>,
    ) -> Result<Vec<Post>, Error>;
}
