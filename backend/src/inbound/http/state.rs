//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FollowRelations, PostTimeline, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub follows: Arc<dyn FollowRelations>,
    pub posts: Arc<dyn PostTimeline>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        follows: Arc<dyn FollowRelations>,
        posts: Arc<dyn PostTimeline>,
    ) -> Self {
        Self {
            users,
            follows,
            posts,
        }
    }
}
