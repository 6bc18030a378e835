//! `/posts` resource handlers.
//!
//! Each handler validates its input before touching storage.

use actix_web::{HttpResponse, web};

use posts_core::DomainError;
use posts_core::error::RepoError;
use posts_core::validation::{validate_create, validate_id, validate_update};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::payload::PostBody;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = validate_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: PostBody,
) -> AppResult<HttpResponse> {
    let new_post = validate_create(&body.0)?;

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: PostBody,
) -> AppResult<HttpResponse> {
    let id = validate_id(&path)?;
    let patch = validate_update(&body.0)?;

    let post = state
        .posts
        .update_by_id(id, patch)
        .await
        .map_err(missing_post(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = validate_id(&path)?;

    let post = state
        .posts
        .delete_by_id(id)
        .await
        .map_err(missing_post(id))?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(post))
}

/// A vanished target is a 404 for this post; anything else stays a storage failure.
fn missing_post(id: i32) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => DomainError::post_not_found(id).into(),
        other => other.into(),
    }
}
