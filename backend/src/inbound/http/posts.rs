//! Posts API handlers.
//!
//! ```text
//! POST /users/{userId}/posts {"text":"Hello"}
//! GET /users/{userId}/posts  (header: followerId)
//! ```
//!
//! Listing requires the caller to assert an identity through the
//! `followerId` header; the visibility decision itself lives in the domain.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::follow_service::UNKNOWN_FOLLOWER_MESSAGE;
use crate::domain::{Error, Post, PostDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Name of the header carrying the requester identity.
pub const FOLLOWER_ID_HEADER: &str = "followerId";

/// Request body for `POST /users/{userId}/posts`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequestBody {
    #[schema(example = "Hello")]
    pub text: String,
}

/// Read the asserted requester identity from the `followerId` header.
///
/// A missing header is a domain-level concern (the visibility rules reject
/// it with the canonical message), so it maps to `None` here. A header that
/// is present but not an integer can never name an existing user.
fn requester_from(req: &HttpRequest) -> Result<Option<UserId>, Error> {
    let Some(value) = req.headers().get(FOLLOWER_ID_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map(|id| Some(UserId::new(id)))
        .ok_or_else(|| Error::invalid_request(UNKNOWN_FOLLOWER_MESSAGE))
}

/// Publish a post for a user.
#[utoipa::path(
    post,
    path = "/users/{userId}/posts",
    params(("userId" = i64, Path, description = "Owner of the new post")),
    request_body = CreatePostRequestBody,
    responses(
        (status = 201, description = "Post created"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/users/{user_id}/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<CreatePostRequestBody>,
) -> ApiResult<HttpResponse> {
    let owner = UserId::new(path.into_inner());
    let draft = PostDraft {
        text: payload.into_inner().text,
    };

    state.posts.create_post(owner, draft).await?;
    Ok(HttpResponse::Created().finish())
}

/// List a user's posts, subject to the visibility rules.
#[utoipa::path(
    get,
    path = "/users/{userId}/posts",
    params(
        ("userId" = i64, Path, description = "Owner of the posts"),
        ("followerId" = i64, Header, description = "Identity asserted by the caller")
    ),
    responses(
        (status = 200, description = "Posts owned by the user", body = [Post]),
        (status = 400, description = "Missing or unknown followerId"),
        (status = 403, description = "Caller does not follow the user"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/users/{user_id}/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<Post>>> {
    let target = UserId::new(path.into_inner());
    let requester = requester_from(&req)?;

    let posts = state.posts.list_visible_posts(target, requester).await?;
    Ok(web::Json(posts))
}
