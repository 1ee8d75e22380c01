//! Follow-relationship rules.
//!
//! This service owns every decision about the follow graph: self-follow
//! rejection, target and follower existence, idempotent edge creation, and
//! idempotent edge removal. Uniqueness of the (target, follower) pair is
//! delegated to the follower repository, which performs the insert as one
//! atomic statement.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    FollowRelations, FollowerPersistenceError, FollowerRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Error, FollowerListing, UserId};

/// Message returned when a user tries to follow themselves.
pub const SELF_FOLLOW_MESSAGE: &str = "You can't follow yourself";
/// Message returned when the asserted follower does not exist.
pub const UNKNOWN_FOLLOWER_MESSAGE: &str = "Nonexistent followerId";
/// Message returned when the addressed user does not exist.
pub const UNKNOWN_USER_MESSAGE: &str = "User not found";

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_follower_error(error: FollowerPersistenceError) -> Error {
    match error {
        FollowerPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("follower repository unavailable: {message}"))
        }
        FollowerPersistenceError::Query { message } => {
            Error::internal(format!("follower repository error: {message}"))
        }
    }
}

/// Follow-relationship service implementing the [`FollowRelations`] port.
#[derive(Clone)]
pub struct FollowService<U, F> {
    users: Arc<U>,
    followers: Arc<F>,
}

impl<U, F> FollowService<U, F> {
    /// Create a new service over the user and follower repositories.
    pub fn new(users: Arc<U>, followers: Arc<F>) -> Self {
        Self { users, followers }
    }
}

impl<U, F> FollowService<U, F>
where
    U: UserRepository,
{
    /// Fail with a not-found error unless `target` resolves to a user.
    async fn require_target(&self, target: UserId) -> Result<(), Error> {
        if self.users.exists(target).await.map_err(map_user_error)? {
            Ok(())
        } else {
            Err(Error::not_found(UNKNOWN_USER_MESSAGE))
        }
    }
}

#[async_trait]
impl<U, F> FollowRelations for FollowService<U, F>
where
    U: UserRepository,
    F: FollowerRepository,
{
    async fn follow(&self, target: UserId, follower: UserId) -> Result<(), Error> {
        // Rejected before any store access: holds even for unknown users.
        if target == follower {
            return Err(Error::conflict(SELF_FOLLOW_MESSAGE));
        }

        self.require_target(target).await?;

        if !self
            .users
            .exists(follower)
            .await
            .map_err(map_user_error)?
        {
            return Err(Error::invalid_request(UNKNOWN_FOLLOWER_MESSAGE));
        }

        self.followers
            .ensure_edge(target, follower)
            .await
            .map_err(map_follower_error)
    }

    async fn unfollow(&self, target: UserId, follower: UserId) -> Result<(), Error> {
        self.require_target(target).await?;

        self.followers
            .remove_edge(target, follower)
            .await
            .map_err(map_follower_error)
    }

    async fn list_followers(&self, target: UserId) -> Result<FollowerListing, Error> {
        self.require_target(target).await?;

        let followers = self
            .followers
            .list_for_target(target)
            .await
            .map_err(map_follower_error)?;

        Ok(FollowerListing { followers })
    }
}

#[cfg(test)]
#[path = "follow_service_tests.rs"]
mod tests;
