//! Post data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Stable post identifier assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post published by a user.
///
/// ## Invariants
/// - `author_id` must reference an existing user at creation time.
/// - Posts are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: PostId,
    /// The user who owns the post.
    #[schema(value_type = i64, example = 1)]
    pub author_id: UserId,
    /// Free-form post body.
    #[schema(example = "Hello")]
    pub text: String,
    /// Creation timestamp assigned by the store.
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

/// Payload for publishing a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub text: String,
}

impl PostDraft {
    /// Build a draft from borrowed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
