//! API route definitions

use crate::auth::middleware::{require_admin, require_auth};
use crate::handlers::{admin, auth, posts, users};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Create the /api routes
pub fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/posts", get(posts::list_posts))
        .route("/posts/:id", get(posts::get_post));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/user/me", get(users::me_handler))
        .route("/protected/posts", post(posts::create_post))
        .route("/protected/posts/:id", put(posts::update_post))
        .route("/protected/posts/:id", delete(posts::delete_post))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin-only routes (authentication + admin role required)
    let admin_routes = Router::new()
        .route("/admin/users", get(admin::list_users))
        .layer(middleware::from_fn_with_state(state, require_admin));

    // Combine routes
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
}
