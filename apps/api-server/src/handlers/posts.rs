//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with id {}", id)))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner().validate().map_err(AppError::Validation)?;

    let post = Post::new(new_post.title, new_post.author, new_post.content);
    let saved = state.posts.create(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(&saved)))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();

    let body_id = request.id.as_deref().unwrap_or("");
    if body_id != path.as_str() {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path.as_str(),
            body_id
        )));
    }

    let id = parse_id(&path)?;
    state.posts.update(id, request.into_patch()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    tracing::info!(%id, "Deleted blog post");
    Ok(HttpResponse::NoContent().finish())
}

/// An id that does not parse as a UUID can never match a record; the
/// gateway contract treats it as an invalid identifier.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::from(RepoError::InvalidId(raw.to_string())))
}
