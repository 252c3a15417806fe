#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use quill_core::domain::{Author, Post, PostPatch};
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn model(id: Uuid, title: &str) -> post::Model {
        post::Model {
            id,
            author_first_name: Some("Ada".to_owned()),
            author_last_name: Some("Lovelace".to_owned()),
            title: title.to_owned(),
            content: Some("Content".to_owned()),
            created: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn find_post_by_id() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(post_id).await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
        assert_eq!(found.author_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn find_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(Uuid::new_v4(), "one"),
                model(Uuid::new_v4(), "two"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "one");
    }

    #[tokio::test]
    async fn create_returns_stored_record() {
        let post = Post::new(
            "Fresh".to_owned(),
            Author {
                first_name: Some("Ada".to_owned()),
                last_name: Some("Lovelace".to_owned()),
            },
            Some("Content".to_owned()),
        );
        let stored = post::Model {
            id: post.id,
            author_first_name: post.author.first_name.clone(),
            author_last_name: post.author.last_name.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            created: post.created.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo.create(post.clone()).await.unwrap();
        assert_eq!(saved.id, post.id);
        assert_eq!(saved.title, "Fresh");
    }

    #[tokio::test]
    async fn update_existing_post_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("New".to_owned()),
            ..Default::default()
        };
        repo.update(Uuid::new_v4(), patch).await.unwrap();
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("New".to_owned()),
            ..Default::default()
        };
        let err = repo.update(Uuid::new_v4(), patch).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_id_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.delete(Uuid::new_v4()).await.unwrap();
    }
}
