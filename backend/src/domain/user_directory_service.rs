//! User directory service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserDirectory, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDraft};

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

/// User directory implementing the [`UserDirectory`] port.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    users: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a new directory over the user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        self.users.insert(&draft).await.map_err(map_user_error)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list_all().await.map_err(map_user_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{ErrorCode, UserId};

    #[rstest]
    #[tokio::test]
    async fn create_user_returns_the_stored_profile() {
        let mut users = MockUserRepository::new();
        users.expect_insert().returning(|draft| {
            Ok(User {
                id: UserId::new(1),
                name: draft.name.clone(),
                age: draft.age,
            })
        });
        let directory = UserDirectoryService::new(Arc::new(users));

        let user = directory
            .create_user(UserDraft::new("Fulano", 30))
            .await
            .expect("user is created");

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Fulano");
        assert_eq!(user.age, 30);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut users = MockUserRepository::new();
        users
            .expect_list_all()
            .returning(|| Err(UserPersistenceError::connection("refused")));
        let directory = UserDirectoryService::new(Arc::new(users));

        let err = directory.list_users().await.expect_err("listing fails");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
