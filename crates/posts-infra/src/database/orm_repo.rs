//! ORM-backed post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait,
};

use posts_core::domain::{NewPost, Post, PostPatch};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::orm_base::{SeaOrmBaseRepository, map_db_err};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(user_id = new_post.user_id, "Inserting post");

        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Post, RepoError> {
        tracing::debug!(post_id = id, "Updating post");

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = PostEntity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if patch.is_empty() {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(existing.into());
        }

        let mut active: post::ActiveModel = existing.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(body) = patch.body {
            active.body = Set(body);
        }
        if let Some(user_id) = patch.user_id {
            active.user_id = Set(user_id);
        }

        let updated = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    fn backend_name(&self) -> &'static str {
        "orm"
    }
}
