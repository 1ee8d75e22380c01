//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification for the REST API. The
//! document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Post, User};
use crate::inbound::http::followers::{FollowRequestBody, FollowerEntryBody, FollowersResponseBody};
use crate::inbound::http::posts::CreatePostRequestBody;
use crate::inbound::http::users::CreateUserRequestBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirp backend API",
        description = "HTTP interface for users, posts, and follow relationships."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::followers::follow_user,
        crate::inbound::http::followers::list_followers,
        crate::inbound::http::followers::unfollow_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Post,
        CreateUserRequestBody,
        CreatePostRequestBody,
        FollowRequestBody,
        FollowerEntryBody,
        FollowersResponseBody,
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "posts", description = "Publishing and reading posts"),
        (name = "followers", description = "Managing the follow graph"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_every_endpoint_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{userId}/posts"));
        assert!(paths.contains_key("/users/{userId}/followers"));
        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }
}
