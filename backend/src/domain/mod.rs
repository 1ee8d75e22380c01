//! Domain model and decision rules.
//!
//! Purpose: define the entities (users, posts, follow edges), the
//! transport-agnostic error type, the port traits at the hexagonal boundary,
//! and the services holding the follow-relationship and post-visibility
//! rules. Adapters on either side depend on this module, never the other way
//! around.

pub mod error;
pub mod follow;
pub mod follow_service;
pub mod ports;
pub mod post;
pub mod post_service;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::follow::{FollowId, FollowerEntry, FollowerListing};
pub use self::follow_service::FollowService;
pub use self::post::{Post, PostDraft, PostId};
pub use self::post_service::PostService;
pub use self::user::{User, UserDraft, UserId};
pub use self::user_directory_service::UserDirectoryService;
