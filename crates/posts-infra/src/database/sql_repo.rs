//! Raw SQL post repository.
//!
//! Hand-written statements against the `posts` table, executed through the
//! SeaORM connection pool. Update and delete are single statements with
//! `RETURNING`, so each is atomic without an explicit transaction.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbConn, FromQueryResult, Statement, Value};

use posts_core::domain::{NewPost, Post, PostPatch};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

use super::orm_base::map_db_err;

const SELECT_ALL: &str = "SELECT id, title, body, user_id FROM posts";

const SELECT_BY_ID: &str = "SELECT id, title, body, user_id FROM posts WHERE id = $1";

const INSERT: &str = "INSERT INTO posts (title, body, user_id) VALUES ($1, $2, $3) \
     RETURNING id, title, body, user_id";

const UPDATE_BY_ID: &str = "UPDATE posts SET \
     title = COALESCE($1, title), \
     body = COALESCE($2, body), \
     user_id = COALESCE($3, user_id) \
     WHERE id = $4 \
     RETURNING id, title, body, user_id";

const DELETE_BY_ID: &str = "DELETE FROM posts WHERE id = $1 RETURNING id, title, body, user_id";

#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: i32,
    title: String,
    body: String,
    user_id: i32,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            user_id: row.user_id,
        }
    }
}

/// Post repository speaking plain SQL.
pub struct SqlPostRepository {
    db: DbConn,
}

impl SqlPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    async fn fetch_one(&self, stmt: Statement) -> Result<Option<Post>, RepoError> {
        let row = PostRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for SqlPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostRow::find_by_statement(self.statement(SELECT_ALL, Vec::new()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        self.fetch_one(self.statement(SELECT_BY_ID, [Value::from(id)]))
            .await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Post, RepoError> {
        tracing::debug!(post_id = id, "Deleting post");

        self.fetch_one(self.statement(DELETE_BY_ID, [Value::from(id)]))
            .await?
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(user_id = post.user_id, "Inserting post");

        let stmt = self.statement(
            INSERT,
            [
                Value::from(post.title),
                Value::from(post.body),
                Value::from(post.user_id),
            ],
        );

        self.fetch_one(stmt)
            .await?
            .ok_or_else(|| RepoError::Query("insert returned no row".to_string()))
    }

    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Post, RepoError> {
        tracing::debug!(post_id = id, "Updating post");

        let stmt = self.statement(
            UPDATE_BY_ID,
            [
                Value::from(patch.title),
                Value::from(patch.body),
                Value::from(patch.user_id),
                Value::from(id),
            ],
        );

        self.fetch_one(stmt).await?.ok_or(RepoError::NotFound)
    }

    fn backend_name(&self) -> &'static str {
        "sql"
    }
}
