//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod follow_relations;
mod follower_repository;
mod post_repository;
mod post_timeline;
mod user_directory;
mod user_repository;

pub use follow_relations::FollowRelations;
#[cfg(test)]
pub use follower_repository::MockFollowerRepository;
pub use follower_repository::{FollowerPersistenceError, FollowerRepository};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostPersistenceError, PostRepository};
pub use post_timeline::PostTimeline;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
