//! Post-visibility rules.
//!
//! A requester may list a user's posts only when they follow that user or
//! are that user; self-access never consults the follow graph. The checks
//! run in a fixed order so unknown targets always win over missing or
//! unknown requesters.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::follow_service::{UNKNOWN_FOLLOWER_MESSAGE, UNKNOWN_USER_MESSAGE};
use crate::domain::ports::{
    FollowerPersistenceError, FollowerRepository, PostPersistenceError, PostRepository,
    PostTimeline, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, Post, PostDraft, UserId};

/// Message returned when no requester identity was supplied.
pub const MISSING_REQUESTER_MESSAGE: &str = "You forgot the header: followerId";
/// Message returned when the requester is not allowed to see the posts.
pub const NOT_AUTHORIZED_MESSAGE: &str = "You can't see these posts.";

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

fn map_post_error(error: PostPersistenceError) -> Error {
    match error {
        PostPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("post repository unavailable: {message}"))
        }
        PostPersistenceError::Query { message } => {
            Error::internal(format!("post repository error: {message}"))
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

/// Post service implementing the [`PostTimeline`] port.
#[derive(Clone)]
pub struct PostService<U, P, F> {
    users: Arc<U>,
    posts: Arc<P>,
    followers: Arc<F>,
}

impl<U, P, F> PostService<U, P, F> {
    /// Create a new service over the user, post, and follower repositories.
    pub fn new(users: Arc<U>, posts: Arc<P>, followers: Arc<F>) -> Self {
        Self {
            users,
            posts,
            followers,
        }
    }
}

#[async_trait]
impl<U, P, F> PostTimeline for PostService<U, P, F>
where
    U: UserRepository,
    P: PostRepository,
    F: FollowerRepository,
{
    async fn create_post(&self, owner: UserId, draft: PostDraft) -> Result<Post, Error> {
        if !self.users.exists(owner).await.map_err(map_user_error)? {
            return Err(Error::not_found(UNKNOWN_USER_MESSAGE));
        }

        self.posts
            .insert(owner, &draft)
            .await
            .map_err(map_post_error)
    }

    async fn list_visible_posts(
        &self,
        target: UserId,
        requester: Option<UserId>,
    ) -> Result<Vec<Post>, Error> {
        if !self.users.exists(target).await.map_err(map_user_error)? {
            return Err(Error::not_found(UNKNOWN_USER_MESSAGE));
        }

        let Some(requester) = requester else {
            return Err(Error::invalid_request(MISSING_REQUESTER_MESSAGE));
        };

        if !self
            .users
            .exists(requester)
            .await
            .map_err(map_user_error)?
        {
            return Err(Error::invalid_request(UNKNOWN_FOLLOWER_MESSAGE));
        }

        // Self-access is always permitted, regardless of follow edges.
        if requester != target
            && !self
                .followers
                .follows(target, requester)
                .await
                .map_err(map_follower_error)?
        {
            return Err(Error::forbidden(NOT_AUTHORIZED_MESSAGE));
        }

        self.posts
            .list_by_author(target)
            .await
            .map_err(map_post_error)
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
