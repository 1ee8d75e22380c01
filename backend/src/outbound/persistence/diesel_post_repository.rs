//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{Post, PostDraft, PostId, UserId};

use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed implementation of the `PostRepository` port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain post persistence errors.
fn map_pool_error(error: PoolError) -> PostPersistenceError {
    match error {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            PostPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain post persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> PostPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "diesel operation failed");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PostPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => PostPersistenceError::query("record not found"),
        _ => PostPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain post.
fn row_to_post(row: PostRow) -> Post {
    Post {
        id: PostId::new(row.id),
        author_id: UserId::new(row.user_id),
        text: row.text,
        created_at: row.created_at,
    }
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn insert(
        &self,
        author: UserId,
        draft: &PostDraft,
    ) -> Result<Post, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: PostRow = diesel::insert_into(posts::table)
            .values(NewPostRow {
                user_id: author.get(),
                text: draft.text.as_str(),
            })
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_post(row))
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostRow> = posts::table
            .filter(posts::user_id.eq(author.get()))
            .select(PostRow::as_select())
            .order(posts::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_post).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::build("bad url"));

        assert!(matches!(err, PostPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn rows_convert_to_domain_posts() {
        let created_at = Utc::now();
        let post = row_to_post(PostRow {
            id: 3,
            user_id: 1,
            text: "Hello".to_owned(),
            created_at,
        });

        assert_eq!(post.id, PostId::new(3));
        assert_eq!(post.author_id, UserId::new(1));
        assert_eq!(post.text, "Hello");
        assert_eq!(post.created_at, created_at);
    }
}
