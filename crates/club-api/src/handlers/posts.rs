//! Blog post handlers
//!
//! Reads are public; creation, update, and deletion sit behind the
//! authenticated-route guard.

use crate::auth::AuthenticatedUser;
use crate::error::{AppError, AppJson};
use crate::state::AppState;
use crate::store::PostRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Post creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Post update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Deletion confirmation response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all posts
///
/// # Responses
///
/// * `200 OK` - All posts, newest first
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = [club_core::models::Post]),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let posts = PostRepository::new(state.db_pool.clone())
        .list_all()
        .await
        .map_err(|e| AppError::Database(format!("Failed to fetch posts: {e}")))?;

    Ok(Json(posts))
}

/// Get a single post by id
///
/// # Responses
///
/// * `200 OK` - The post
/// * `400 Bad Request` - Invalid post id
/// * `404 Not Found` - No such post
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = club_core::models::Post),
        (status = 404, description = "Post not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostRepository::new(state.db_pool.clone())
        .find_by_id(id)
        .await
        .map_err(|e| AppError::Database(format!("Failed to fetch post: {e}")))?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;

    Ok(Json(post))
}

/// Create a new post
///
/// The authoring account is taken from the validated request context.
///
/// # Responses
///
/// * `201 Created` - The stored post
/// * `400 Bad Request` - Invalid input
/// * `401 Unauthorized` - Missing or invalid token
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    post,
    path = "/api/protected/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = club_core::models::Post),
        (status = 400, description = "Invalid input", body = crate::error::ApiError),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid input: {e}")))?;

    let post = PostRepository::new(state.db_pool.clone())
        .create(&request.title, &request.content, user.user_id)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create post: {e}")))?;

    tracing::info!(post_id = post.id, author_id = user.user_id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// Update an existing post
///
/// # Responses
///
/// * `200 OK` - The updated post
/// * `400 Bad Request` - Invalid input
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - No such post
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    put,
    path = "/api/protected/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = club_core::models::Post),
        (status = 400, description = "Invalid input", body = crate::error::ApiError),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 404, description = "Post not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid input: {e}")))?;

    let post = PostRepository::new(state.db_pool.clone())
        .update(id, &request.title, &request.content)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update post: {e}")))?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;

    Ok(Json(post))
}

/// Delete a post by id
///
/// # Responses
///
/// * `200 OK` - Deletion confirmed
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - No such post
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    delete,
    path = "/api/protected/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 404, description = "Post not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = PostRepository::new(state.db_pool.clone())
        .delete(id)
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete post: {e}")))?;

    if !deleted {
        return Err(AppError::NotFound("Post".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_request_validation() {
        let valid = CreatePostRequest {
            title: "Season opening".to_string(),
            content: "Courts open Saturday.".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            ..valid.clone()
        };
        assert!(empty_title.validate().is_err());

        let empty_content = CreatePostRequest {
            content: String::new(),
            ..valid
        };
        assert!(empty_content.validate().is_err());
    }

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse {
            message: "Post deleted successfully".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("Post deleted successfully"));
    }
}
