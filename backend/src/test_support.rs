//! In-memory persistence doubles for tests.
//!
//! [`InMemorySocialStore`] implements all three repository ports over a
//! mutex-guarded map, mirroring the relational schema's behaviour: ids are
//! assigned sequentially and the (target, follower) edge pair is unique.
//! Integration tests wire it behind the real services to exercise the HTTP
//! surface without a database.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    FollowerPersistenceError, FollowerRepository, PostPersistenceError, PostRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{FollowId, FollowerEntry, Post, PostDraft, PostId, User, UserDraft, UserId};

#[derive(Debug, Clone)]
struct EdgeRecord {
    id: i64,
    target: i64,
    follower: i64,
}

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<i64, User>,
    posts: Vec<Post>,
    edges: Vec<EdgeRecord>,
    next_user_id: i64,
    next_post_id: i64,
    next_edge_id: i64,
}

/// Shared in-memory store implementing every repository port.
#[derive(Debug, Default)]
pub struct InMemorySocialStore {
    inner: Mutex<StoreInner>,
}

impl InMemorySocialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("store mutex poisoned")
    }

    /// Insert a user directly, bypassing the service layer.
    pub fn seed_user(&self, name: &str, age: i32) -> User {
        let mut inner = self.lock();
        inner.next_user_id += 1;
        let user = User {
            id: UserId::new(inner.next_user_id),
            name: name.to_owned(),
            age,
        };
        inner.users.insert(user.id.get(), user.clone());
        user
    }

    /// Insert a post directly, bypassing the service layer.
    pub fn seed_post(&self, author: UserId, text: &str) -> Post {
        let mut inner = self.lock();
        inner.next_post_id += 1;
        let post = Post {
            id: PostId::new(inner.next_post_id),
            author_id: author,
            text: text.to_owned(),
            created_at: Utc::now(),
        };
        inner.posts.push(post.clone());
        post
    }

    /// Insert a follow edge directly, bypassing the service layer.
    pub fn seed_edge(&self, target: UserId, follower: UserId) -> FollowId {
        let mut inner = self.lock();
        if let Some(existing) = inner
            .edges
            .iter()
            .find(|edge| edge.target == target.get() && edge.follower == follower.get())
        {
            return FollowId::new(existing.id);
        }
        inner.next_edge_id += 1;
        let id = inner.next_edge_id;
        inner.edges.push(EdgeRecord {
            id,
            target: target.get(),
            follower: follower.get(),
        });
        FollowId::new(id)
    }

    /// Total number of stored follow edges, across all users.
    pub fn edge_count(&self) -> usize {
        self.lock().edges.len()
    }
}

#[async_trait]
impl UserRepository for InMemorySocialStore {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        Ok(self.seed_user(draft.name.as_str(), draft.age))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock().users.get(&id.get()).cloned())
    }

    async fn exists(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock().users.contains_key(&id.get()))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock().users.values().cloned().collect())
    }
}

#[async_trait]
impl PostRepository for InMemorySocialStore {
    async fn insert(
        &self,
        author: UserId,
        draft: &PostDraft,
    ) -> Result<Post, PostPersistenceError> {
        Ok(self.seed_post(author, draft.text.as_str()))
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let mut posts: Vec<Post> = self
            .lock()
            .posts
            .iter()
            .filter(|post| post.author_id == author)
            .cloned()
            .collect();
        // Newest first, matching the database adapter.
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl FollowerRepository for InMemorySocialStore {
    async fn follows(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        Ok(self
            .lock()
            .edges
            .iter()
            .any(|edge| edge.target == target.get() && edge.follower == follower.get()))
    }

    async fn ensure_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError> {
        self.seed_edge(target, follower);
        Ok(())
    }

    async fn remove_edge(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<(), FollowerPersistenceError> {
        self.lock()
            .edges
            .retain(|edge| !(edge.target == target.get() && edge.follower == follower.get()));
        Ok(())
    }

    async fn list_for_target(
        &self,
        target: UserId,
    ) -> Result<Vec<FollowerEntry>, FollowerPersistenceError> {
        let inner = self.lock();
        Ok(inner
            .edges
            .iter()
            .filter(|edge| edge.target == target.get())
            .map(|edge| FollowerEntry {
                id: FollowId::new(edge.id),
                name: inner
                    .users
                    .get(&edge.follower)
                    .map(|user| user.name.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }
}
