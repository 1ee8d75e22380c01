//! Followers API handlers.
//!
//! ```text
//! PUT /users/{userId}/followers {"followerId":2}
//! GET /users/{userId}/followers
//! DELETE /users/{userId}/followers?followerId=2
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{FollowId, FollowerListing, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `PUT /users/{userId}/followers`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequestBody {
    #[schema(example = 2)]
    pub follower_id: i64,
}

/// Query parameters for `DELETE /users/{userId}/followers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowQuery {
    pub follower_id: i64,
}

/// One entry of a follower listing: the edge id and the follower's name.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowerEntryBody {
    #[schema(value_type = i64, example = 1)]
    pub id: FollowId,
    #[schema(example = "Beltrano")]
    pub name: String,
}

/// Response body for `GET /users/{userId}/followers`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowersResponseBody {
    #[schema(example = 1)]
    pub followers_count: usize,
    pub content: Vec<FollowerEntryBody>,
}

impl From<FollowerListing> for FollowersResponseBody {
    fn from(value: FollowerListing) -> Self {
        Self {
            followers_count: value.count(),
            content: value
                .followers
                .into_iter()
                .map(|entry| FollowerEntryBody {
                    id: entry.id,
                    name: entry.name,
                })
                .collect(),
        }
    }
}

/// Follow a user.
#[utoipa::path(
    put,
    path = "/users/{userId}/followers",
    params(("userId" = i64, Path, description = "User to follow")),
    request_body = FollowRequestBody,
    responses(
        (status = 204, description = "Edge recorded (or already present)"),
        (status = 400, description = "Unknown followerId"),
        (status = 404, description = "Unknown user"),
        (status = 409, description = "Self-follow"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["followers"],
    operation_id = "followUser"
)]
#[put("/users/{user_id}/followers")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<FollowRequestBody>,
) -> ApiResult<HttpResponse> {
    let target = UserId::new(path.into_inner());
    let follower = UserId::new(payload.follower_id);

    state.follows.follow(target, follower).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List a user's followers with their count.
#[utoipa::path(
    get,
    path = "/users/{userId}/followers",
    params(("userId" = i64, Path, description = "User whose followers to list")),
    responses(
        (status = 200, description = "Follower listing", body = FollowersResponseBody),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["followers"],
    operation_id = "listFollowers"
)]
#[get("/users/{user_id}/followers")]
pub async fn list_followers(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<FollowersResponseBody>> {
    let target = UserId::new(path.into_inner());

    let listing = state.follows.list_followers(target).await?;
    Ok(web::Json(FollowersResponseBody::from(listing)))
}

/// Unfollow a user.
#[utoipa::path(
    delete,
    path = "/users/{userId}/followers",
    params(
        ("userId" = i64, Path, description = "User to unfollow"),
        ("followerId" = i64, Query, description = "Follower removing the edge")
    ),
    responses(
        (status = 204, description = "Edge removed (or never present)"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["followers"],
    operation_id = "unfollowUser"
)]
#[delete("/users/{user_id}/followers")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<UnfollowQuery>,
) -> ApiResult<HttpResponse> {
    let target = UserId::new(path.into_inner());
    let follower = UserId::new(query.follower_id);

    state.follows.unfollow(target, follower).await?;
    Ok(HttpResponse::NoContent().finish())
}
