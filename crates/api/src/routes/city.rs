//! Route definitions for the `city` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::city;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// POST   /city          -> create
/// GET    /city/{id}     -> get_by_id
/// PUT    /city/{id}     -> update
/// DELETE /city/{id}     -> delete
/// GET    /cities        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/city", post(city::create))
        .route(
            "/city/{id}",
            get(city::get_by_id)
                .put(city::update)
                .delete(city::delete),
        )
        .route("/cities", get(city::list))
}
