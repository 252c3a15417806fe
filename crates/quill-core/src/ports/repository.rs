use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;

/// Persistence gateway for blog posts.
///
/// Every operation is a single round trip to the store; callers get either
/// the result or a [`RepoError`]. No retries, no batching.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Fetch one post by its ID. `Ok(None)` means the record does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post and return the stored record.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Apply a partial update. Fields absent from the patch keep their
    /// stored values. Errs `NotFound` when no record matches `id`.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError>;

    /// Remove a post unconditionally. Deleting an id that does not exist
    /// is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
