//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostPatch};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

/// In-memory post store keyed by id.
///
/// New ids are always `max + 1`, so key order matches insertion order.
/// Every mutation runs under a single write lock, which makes update and
/// delete atomic with respect to concurrent requests.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i32, Post>>,
}

impl InMemoryPostRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store pre-populated with the two placeholder posts (ids 1 and 2).
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: RwLock::new(posts.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let id = match posts.last_key_value() {
            Some((max, _)) => max
                .checked_add(1)
                .ok_or_else(|| RepoError::Query("post id space exhausted".to_string()))?,
            None => 1,
        };

        let post = post.with_id(id);
        posts.insert(id, post.clone());
        tracing::debug!(post_id = id, "Inserted post");

        Ok(post)
    }

    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        patch.apply(post);
        Ok(post.clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"
                .to_string(),
            body: "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\n\
                   reprehenderit molestiae ut ut quas totam\n\
                   nostrum rerum est autem sunt rem eveniet architecto"
                .to_string(),
            user_id: 1,
        },
        Post {
            id: 2,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque\n\
                   fugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis\n\
                   qui aperiam non debitis possimus qui neque nisi nulla"
                .to_string(),
            user_id: 1,
        },
    ]
}
