//! Follow-edge data model.
//!
//! A follow edge is a directed relationship record meaning "follower follows
//! target". Edges are identified by a store-assigned id; the (target,
//! follower) pair is unique, so re-following never duplicates an edge.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable follow-edge identifier assigned by the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FollowId(i64);

impl FollowId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FollowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in a user's follower listing: the edge id paired with the
/// follower's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowerEntry {
    pub id: FollowId,
    pub name: String,
}

/// The followers of a single user.
///
/// The reported count is derived from the entries, so it can never disagree
/// with the listing length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerListing {
    pub followers: Vec<FollowerEntry>,
}

impl FollowerListing {
    /// Number of followers in the listing.
    pub fn count(&self) -> usize {
        self.followers.len()
    }
}
