//! Behaviour coverage for the post-visibility rules.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockFollowerRepository, MockPostRepository, MockUserRepository};
use crate::domain::PostId;

fn service(
    users: MockUserRepository,
    posts: MockPostRepository,
    followers: MockFollowerRepository,
) -> PostService<MockUserRepository, MockPostRepository, MockFollowerRepository> {
    PostService::new(Arc::new(users), Arc::new(posts), Arc::new(followers))
}

fn hello_post(author: UserId) -> Post {
    Post {
        id: PostId::new(1),
        author_id: author,
        text: "Hello".to_owned(),
        created_at: Utc::now(),
    }
}

#[rstest]
#[tokio::test]
async fn create_post_fails_with_not_found_for_unknown_owner() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(false));
    let svc = service(users, MockPostRepository::new(), MockFollowerRepository::new());

    let err = svc
        .create_post(UserId::new(999), PostDraft::new("Some text"))
        .await
        .expect_err("unknown owner fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn create_post_stores_the_draft_for_an_existing_owner() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut posts = MockPostRepository::new();
    posts
        .expect_insert()
        .times(1)
        .returning(|author, draft| {
            Ok(Post {
                id: PostId::new(7),
                author_id: author,
                text: draft.text.clone(),
                created_at: Utc::now(),
            })
        });
    let svc = service(users, posts, MockFollowerRepository::new());

    let post = svc
        .create_post(UserId::new(1), PostDraft::new("Some text"))
        .await
        .expect("post is created");

    assert_eq!(post.author_id, UserId::new(1));
    assert_eq!(post.text, "Some text");
}

#[rstest]
#[tokio::test]
async fn listing_fails_with_not_found_for_unknown_target() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .with(eq(UserId::new(999)))
        .returning(|_| Ok(false));
    let svc = service(
        users,
        MockPostRepository::new(),
        MockFollowerRepository::new(),
    );

    let err = svc
        .list_visible_posts(UserId::new(999), None)
        .await
        .expect_err("unknown target fails");

    // The unknown target wins over the missing requester.
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn listing_fails_when_no_requester_is_supplied() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let svc = service(
        users,
        MockPostRepository::new(),
        MockFollowerRepository::new(),
    );

    let err = svc
        .list_visible_posts(UserId::new(1), None)
        .await
        .expect_err("missing requester fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), MISSING_REQUESTER_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn listing_fails_when_the_requester_is_unknown() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists()
        .with(eq(UserId::new(1)))
        .returning(|_| Ok(true));
    users
        .expect_exists()
        .with(eq(UserId::new(999)))
        .returning(|_| Ok(false));
    let svc = service(
        users,
        MockPostRepository::new(),
        MockFollowerRepository::new(),
    );

    let err = svc
        .list_visible_posts(UserId::new(1), Some(UserId::new(999)))
        .await
        .expect_err("unknown requester fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), UNKNOWN_FOLLOWER_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn listing_is_forbidden_for_a_non_follower() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut followers = MockFollowerRepository::new();
    followers
        .expect_follows()
        .with(eq(UserId::new(1)), eq(UserId::new(2)))
        .returning(|_, _| Ok(false));
    let svc = service(users, MockPostRepository::new(), followers);

    let err = svc
        .list_visible_posts(UserId::new(1), Some(UserId::new(2)))
        .await
        .expect_err("non-follower is rejected");

    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert_eq!(err.message(), NOT_AUTHORIZED_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn listing_returns_posts_for_a_follower() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut followers = MockFollowerRepository::new();
    followers.expect_follows().returning(|_, _| Ok(true));
    let mut posts = MockPostRepository::new();
    posts
        .expect_list_by_author()
        .with(eq(UserId::new(1)))
        .returning(|author| Ok(vec![hello_post(author)]));
    let svc = service(users, posts, followers);

    let listed = svc
        .list_visible_posts(UserId::new(1), Some(UserId::new(2)))
        .await
        .expect("follower may list posts");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].text, "Hello");
}

#[rstest]
#[tokio::test]
async fn self_access_never_consults_the_follow_graph() {
    let mut users = MockUserRepository::new();
    users.expect_exists().returning(|_| Ok(true));
    let mut posts = MockPostRepository::new();
    posts
        .expect_list_by_author()
        .returning(|author| Ok(vec![hello_post(author)]));
    // No expectations on the follower repository: a `follows` call panics.
    let svc = service(users, posts, MockFollowerRepository::new());

    let listed = svc
        .list_visible_posts(UserId::new(1), Some(UserId::new(1)))
        .await
        .expect("self access is always permitted");

    assert_eq!(listed.len(), 1);
}
