pub mod city;
pub mod continent;
pub mod country;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /continent                 create
/// /continent/{id}            get, update, delete
/// /continents                list
///
/// /country                   create
/// /country/{id}              get, update, delete
/// /countries                 list
///
/// /city                      create
/// /city/{id}                 get, update, delete
/// /cities                    list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(continent::router())
        .merge(country::router())
        .merge(city::router())
}
