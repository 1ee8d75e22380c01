//! Shared fixtures for HTTP API tests.
//!
//! Builds the real handler stack over the in-memory store so endpoint tests
//! exercise the full decision logic without a database.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use chirp_backend::domain::{FollowService, PostService, UserDirectoryService};
use chirp_backend::inbound::http::state::HttpState;
use chirp_backend::inbound::http::{followers, posts, users};
use chirp_backend::test_support::InMemorySocialStore;

/// Build the application with every social endpoint mounted over `store`.
pub fn social_app(
    store: Arc<InMemorySocialStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(UserDirectoryService::new(store.clone())),
        Arc::new(FollowService::new(store.clone(), store.clone())),
        Arc::new(PostService::new(store.clone(), store.clone(), store)),
    );

    App::new()
        .app_data(web::Data::new(state))
        .service(users::create_user)
        .service(users::list_users)
        .service(posts::create_post)
        .service(posts::list_posts)
        .service(followers::follow_user)
        .service(followers::list_followers)
        .service(followers::unfollow_user)
}
