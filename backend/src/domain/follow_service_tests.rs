//! Behaviour coverage for the follow-relationship rules.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockFollowerRepository, MockUserRepository};

fn service(
    users: MockUserRepository,
    followers: MockFollowerRepository,
) -> FollowService<MockUserRepository, MockFollowerRepository> {
    FollowService::new(Arc::new(users), Arc::new(followers))
}

#[rstest]
#[case(UserId::new(1))]
#[case(UserId::new(999))]
#[tokio::test]
async fn follow_rejects_self_follow_before_touching_the_store(#[case] user: UserId) {
    // No expectations: any repository call panics the test.
    let svc = service(MockUserRepository::new(), MockFollowerRepository::new());

    let err = svc.follow(user, user).await.expect_err("self follow fails");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), SELF_FOLLOW_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn follow_fails_with_not_found_for_unknown_target() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .with(eq(UserId::new(999)))
        .returning(|_| Ok(false));
    let svc = service(users, MockFollowerRepository::new());

    let err = svc
        .follow(UserId::new(999), UserId::new(1))
        .await
        .expect_err("unknown target fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn follow_fails_with_invalid_request_for_unknown_follower() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .with(eq(UserId::new(1)))
        .returning(|_| Ok(true));
    users
        .expect_exists()
        .with(eq(UserId::new(999)))
        .returning(|_| Ok(false));
    let svc = service(users, MockFollowerRepository::new());

    let err = svc
        .follow(UserId::new(1), UserId::new(999))
        .await
        .expect_err("unknown follower fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), UNKNOWN_FOLLOWER_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn follow_ensures_the_edge_for_valid_users() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut followers = MockFollowerRepository::new();
    followers
        .expect_ensure_edge()
        .with(eq(UserId::new(1)), eq(UserId::new(2)))
        .times(1)
        .returning(|_, _| Ok(()));
    let svc = service(users, followers);

    svc.follow(UserId::new(1), UserId::new(2))
        .await
        .expect("follow succeeds");
}

#[rstest]
#[tokio::test]
async fn unfollow_fails_with_not_found_for_unknown_target() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(false));
    let svc = service(users, MockFollowerRepository::new());

    let err = svc
        .unfollow(UserId::new(999), UserId::new(1))
        .await
        .expect_err("unknown target fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn unfollow_removes_the_edge_without_checking_its_presence() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut followers = MockFollowerRepository::new();
    followers
        .expect_remove_edge()
        .with(eq(UserId::new(1)), eq(UserId::new(2)))
        .times(1)
        .returning(|_, _| Ok(()));
    let svc = service(users, followers);

    svc.unfollow(UserId::new(1), UserId::new(2))
        .await
        .expect("unfollow succeeds even without a prior edge");
}

#[rstest]
#[tokio::test]
async fn list_followers_fails_with_not_found_for_unknown_target() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(false));
    let svc = service(users, MockFollowerRepository::new());

    let err = svc
        .list_followers(UserId::new(999))
        .await
        .expect_err("unknown target fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_followers_count_matches_the_listing_length() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut followers = MockFollowerRepository::new();
    followers.expect_list_for_target().returning(|_| {
        Ok(vec![crate::domain::FollowerEntry {
            id: crate::domain::FollowId::new(10),
            name: "Beltrano".to_owned(),
        }])
    });
    let svc = service(users, followers);

    let listing = svc
        .list_followers(UserId::new(1))
        .await
        .expect("listing succeeds");

    assert_eq!(listing.count(), listing.followers.len());
    assert_eq!(listing.count(), 1);
}

#[rstest]
#[tokio::test]
async fn store_connection_failures_surface_as_service_unavailable() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .returning(|_| Err(UserPersistenceError::connection("refused")));
    let svc = service(users, MockFollowerRepository::new());

    let err = svc
        .follow(UserId::new(1), UserId::new(2))
        .await
        .expect_err("unavailable store fails");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
