//! Driving port for the follow-relationship rules.

use async_trait::async_trait;

use crate::domain::{Error, FollowerListing, UserId};

/// Domain use-case port for following, unfollowing, and listing followers.
///
/// Argument order follows the HTTP surface: the target comes from the path,
/// the follower from the request body, query, or header.
#[async_trait]
pub trait FollowRelations: Send + Sync {
    /// Record that `follower` follows `target`. Re-following is a no-op.
    async fn follow(&self, target: UserId, follower: UserId) -> Result<(), Error>;

    /// Remove the follow edge from `follower` to `target` if present.
    async fn unfollow(&self, target: UserId, follower: UserId) -> Result<(), Error>;

    /// List the followers of `target`.
    async fn list_followers(&self, target: UserId) -> Result<FollowerListing, Error>;
}
