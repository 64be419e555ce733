//! Route definitions for the `continent` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::continent;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// POST   /continent          -> create
/// GET    /continent/{id}     -> get_by_id
/// PUT    /continent/{id}     -> update
/// DELETE /continent/{id}     -> delete
/// GET    /continents         -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/continent", post(continent::create))
        .route(
            "/continent/{id}",
            get(continent::get_by_id)
                .put(continent::update)
                .delete(continent::delete),
        )
        .route("/continents", get(continent::list))
}
