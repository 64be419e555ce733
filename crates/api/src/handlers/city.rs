//! Handlers for the city resource.

use atlas_core::error::CoreError;
use atlas_core::validation;
use atlas_db::models::city::{City, CityDetails, CityInput, ENTITY};
use atlas_db::repositories::CityRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

fn validate_input(input: &CityInput) -> AppResult<()> {
    validation::require_name(&input.name)?;
    validation::require_id("country_id", input.country_id)?;
    Ok(())
}

/// POST /api/v1/city
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CityInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_input(&input)?;

    let id = CityRepo::create(state.db.as_ref(), &input).await?;
    tracing::info!(city_id = %id, country_id = input.country_id, "City created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/city/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CityDetails>> {
    let city = CityRepo::find_by_id(state.db.as_ref(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY }))?;
    Ok(Json(city))
}

/// GET /api/v1/cities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::list(state.db.as_ref()).await?;
    Ok(Json(cities))
}

/// PUT /api/v1/city/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CityInput>,
) -> AppResult<Json<StatusResponse>> {
    validate_input(&input)?;

    let matched = CityRepo::update(state.db.as_ref(), &id, &input).await?;
    tracing::info!(city_id = %id, matched, "City updated");

    Ok(Json(StatusResponse::UPDATED))
}

/// DELETE /api/v1/city/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let removed = CityRepo::delete(state.db.as_ref(), &id).await?;
    tracing::info!(city_id = %id, removed, "City deleted");

    Ok(Json(StatusResponse::DELETED))
}
