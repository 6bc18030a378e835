use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining the id-addressed read and delete operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List every entity in backend-native order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID and return what was removed.
    ///
    /// Returns [`RepoError::NotFound`] when no entity has that ID.
    async fn delete_by_id(&self, id: ID) -> Result<T, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Persist a new post; the backend assigns its id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Merge `patch` into the stored post as a single atomic operation.
    ///
    /// Returns [`RepoError::NotFound`] when no post has that ID.
    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Post, RepoError>;

    /// Short name of the backend, for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}
