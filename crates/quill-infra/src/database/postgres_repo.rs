//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use quill_core::domain::{Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError> {
        if patch.is_empty() {
            // Nothing to write; still report whether the record exists.
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            };
        }

        let mut changes = <post::ActiveModel as ActiveModelTrait>::default();
        if let Some(title) = patch.title {
            changes.title = Set(title);
        }
        if let Some(author) = patch.author {
            changes.author_first_name = Set(author.first_name);
            changes.author_last_name = Set(author.last_name);
        }
        if let Some(content) = patch.content {
            changes.content = Set(Some(content));
        }

        let result = PostEntity::update_many()
            .set(changes)
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(%id, rows = result.rows_affected, "deleted post");
        Ok(())
    }
}
