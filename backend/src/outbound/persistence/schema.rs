//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Display name.
        name -> Varchar,
        /// Age in years.
        age -> Int4,
    }
}

diesel::table! {
    /// Posts owned by users.
    posts (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Owning user.
        user_id -> Int8,
        /// Free-form post body.
        text -> Text,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Directed follow edges: `follower_id` follows `user_id`.
    ///
    /// The (user_id, follower_id) pair carries a unique constraint so
    /// re-following is an atomic no-op.
    followers (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// The followed user (target).
        user_id -> Int8,
        /// The following user.
        follower_id -> Int8,
    }
}

diesel::joinable!(posts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, posts, followers);
