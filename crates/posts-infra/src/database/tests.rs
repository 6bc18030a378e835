#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::orm_base::map_db_err;
    use crate::database::{SeaOrmPostRepository, SqlPostRepository};
    use posts_core::domain::{NewPost, Post, PostPatch};
    use posts_core::error::RepoError;
    use posts_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            body: "Body\nwith lines".to_owned(),
            user_id: 1,
        }
    }

    #[tokio::test]
    async fn test_orm_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Test Post")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(1).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_orm_find_all_preserves_backend_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "second"), model(1, "first")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let posts: Vec<Post> = repo.find_all().await.unwrap();

        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_orm_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post::Model {
                id: 3,
                title: "A".to_owned(),
                body: "B".to_owned(),
                user_id: 1,
            }]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let created = repo
            .insert(NewPost {
                title: "A".to_owned(),
                body: "B".to_owned(),
                user_id: 1,
            })
            .await
            .unwrap();

        assert_eq!(
            created,
            Post {
                id: 3,
                title: "A".to_owned(),
                body: "B".to_owned(),
                user_id: 1
            }
        );
    }

    #[tokio::test]
    async fn test_orm_update_merges_patch() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Original")]])
            .append_query_results([vec![model(1, "X")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let post = repo
            .update_by_id(
                1,
                PostPatch {
                    title: Some("X".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(post.title, "X");
        assert_eq!(post.body, "Body\nwith lines");
        assert_eq!(post.user_id, 1);
    }

    #[tokio::test]
    async fn test_orm_empty_update_returns_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Original")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let post = repo.update_by_id(1, PostPatch::default()).await.unwrap();

        assert_eq!(post.title, "Original");
    }

    #[tokio::test]
    async fn test_orm_update_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let err = repo
            .update_by_id(
                9,
                PostPatch {
                    title: Some("X".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_orm_update_vanished_row_is_not_found() {
        // Row seen by the SELECT, but the UPDATE ... RETURNING comes back empty.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Original")]])
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let err = repo
            .update_by_id(
                1,
                PostPatch {
                    user_id: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_orm_delete_returns_removed_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "doomed")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let removed: Post = repo.delete_by_id(2).await.unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(removed.title, "doomed");
    }

    #[tokio::test]
    async fn test_orm_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let result: Result<Post, RepoError> = repo.delete_by_id(42).await;
        let err = result.unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_orm_query_failure_is_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation does not exist".to_owned())])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let result: Result<Vec<Post>, RepoError> = repo.find_all().await;
        let err = result.unwrap_err();

        assert!(matches!(err, RepoError::Query(_)));
    }

    #[tokio::test]
    async fn test_sql_find_all_and_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "first"), model(2, "second")]])
            .append_query_results([vec![model(2, "second")]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let one = repo.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(one.title, "second");
    }

    #[tokio::test]
    async fn test_sql_insert_and_update() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "A")]])
            .append_query_results([vec![model(3, "X")]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let created = repo
            .insert(NewPost {
                title: "A".to_owned(),
                body: "Body\nwith lines".to_owned(),
                user_id: 1,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 3);

        let updated = repo
            .update_by_id(
                3,
                PostPatch {
                    title: Some("X".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "X");
        assert_eq!(updated.body, created.body);
    }

    #[tokio::test]
    async fn test_sql_update_and_delete_missing_are_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let err = repo
            .update_by_id(99, PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));

        let err = repo.delete_by_id(99).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[test]
    fn test_map_db_err() {
        assert!(matches!(
            map_db_err(DbErr::RecordNotUpdated),
            RepoError::NotFound
        ));
        assert!(matches!(
            map_db_err(DbErr::RecordNotFound("posts".to_owned())),
            RepoError::NotFound
        ));
        assert!(matches!(
            map_db_err(DbErr::Custom("boom".to_owned())),
            RepoError::Query(_)
        ));
    }
}
