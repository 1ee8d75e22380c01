//! PostgreSQL-backed `FollowerRepository` implementation using Diesel ORM.
//!
//! Edge creation relies on the unique (user_id, follower_id) index: the
//! insert runs with `ON CONFLICT DO NOTHING`, so concurrent duplicate follow
//! requests resolve to a single edge without any read-then-write race.
//! Follower names are resolved through an explicit join on the follower id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FollowerPersistenceError, FollowerRepository};
use crate::domain::{FollowId, FollowerEntry, UserId};

use super::models::NewFollowerRow;
use super::pool::{DbPool, PoolError};
use super::schema::{followers, users};

/// Diesel-backed implementation of the `FollowerRepository` port.
#[derive(Clone)]
pub struct DieselFollowerRepository {
    pool: DbPool,
}

impl DieselFollowerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain follower persistence errors.
fn map_pool_error(error: PoolError) -> FollowerPersistenceError {
    match error {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            FollowerPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain follower persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> FollowerPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "diesel operation failed");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FollowerPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => FollowerPersistenceError::query("record not found"),
        _ => FollowerPersistenceError::query("database error"),
    }
}

#[async_trait]
impl FollowerRepository for DieselFollowerRepository {
    async fn follows(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            followers::table.filter(
                followers::user_id
                    .eq(target.get())
                    .and(followers::follower_id.eq(follower.get())),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn ensure_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(followers::table)
            .values(NewFollowerRow {
                user_id: target.get(),
                follower_id: follower.get(),
            })
            .on_conflict((followers::user_id, followers::follower_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn remove_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            followers::table.filter(
                followers::user_id
                    .eq(target.get())
                    .and(followers::follower_id.eq(follower.get())),
            ),
        )
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }

    async fn list_for_target(
        &self,
        target: UserId,
    ) -> Result<Vec<FollowerEntry>, FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(i64, String)> = followers::table
            .inner_join(users::table.on(users::id.eq(followers::follower_id)))
            .filter(followers::user_id.eq(target.get()))
            .select((followers::id, users::name))
            .order(followers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| FollowerEntry {
                id: FollowId::new(id),
                name,
            })
            .collect())
    }
}
