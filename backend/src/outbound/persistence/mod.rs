//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! The adapters are thin: they translate between Diesel row structs and
//! domain types and map database errors to the port error types. No business
//! logic lives here; in particular, follow-edge idempotency is enforced by
//! the schema's unique constraint rather than by adapter-level checks.

mod diesel_follower_repository;
mod diesel_post_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub use diesel_follower_repository::DieselFollowerRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

/// Schema migrations embedded into the binary and applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
