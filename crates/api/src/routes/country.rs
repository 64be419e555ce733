//! Route definitions for the `country` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::country;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// POST   /country          -> create
/// GET    /country/{id}     -> get_by_id
/// PUT    /country/{id}     -> update
/// DELETE /country/{id}     -> delete
/// GET    /countries        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/country", post(country::create))
        .route(
            "/country/{id}",
            get(country::get_by_id)
                .put(country::update)
                .delete(country::delete),
        )
        .route("/countries", get(country::list))
}
