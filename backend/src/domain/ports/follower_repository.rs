//! Port abstraction for follow-edge persistence adapters and their errors.
//!
//! Edges are addressed by the (target, follower) pair throughout; the store
//! enforces pair uniqueness, so `ensure_edge` is idempotent by construction.
use async_trait::async_trait;

use crate::domain::{FollowerEntry, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by follower repository adapters.
    pub enum FollowerPersistenceError {
        /// Repository connection could not be established.
        Connection => "follower repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "follower repository query failed: {message}",
    }
}

/// Port for managing the directed follow graph.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// Check whether `follower` currently follows `target`.
    async fn follows(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<bool, FollowerPersistenceError>;

    /// Record that `follower` follows `target`. A pre-existing edge is left
    /// untouched; the operation is a single atomic statement either way.
    async fn ensure_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError>;

    /// Delete the edge from `follower` to `target` if present. Absence of
    /// the edge is not an error.
    async fn remove_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError>;

    /// List the followers of `target` as (edge id, follower name) entries.
    async fn list_for_target(
        &self,
        target: UserId,
    ) -> Result<Vec<FollowerEntry>, FollowerPersistenceError>;
}
