//! In-memory post repository - backs builds without the `postgres` feature
//! and the HTTP handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Post store backed by a HashMap behind an async RwLock.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        // Creation order, id as tie-break for stability.
        posts.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        if let Some(content) = patch.content {
            post.content = Some(content);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Author;

    fn sample_post(title: &str) -> Post {
        Post::new(
            title.to_string(),
            Author {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
            },
            Some("content".to_string()),
        )
    }

    #[tokio::test]
    async fn create_then_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(sample_post("hello")).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "hello");
    }

    #[tokio::test]
    async fn find_all_returns_every_record() {
        let repo = InMemoryPostRepository::new();
        repo.create(sample_post("one")).await.unwrap();
        repo.create(sample_post("two")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn partial_update_leaves_omitted_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(sample_post("before")).await.unwrap();

        let patch = PostPatch {
            title: Some("after".to_string()),
            ..Default::default()
        };
        repo.update(post.id, patch).await.unwrap();

        let updated = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "after");
        assert_eq!(updated.content.as_deref(), Some("content"));
        assert_eq!(updated.author_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo
            .update(Uuid::new_v4(), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(sample_post("gone")).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_record_is_ok() {
        let repo = InMemoryPostRepository::new();
        repo.delete(Uuid::new_v4()).await.unwrap();
    }
}
