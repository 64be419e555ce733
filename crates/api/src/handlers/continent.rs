//! Handlers for the continent resource.

use atlas_core::error::CoreError;
use atlas_core::validation;
use atlas_db::models::continent::{Continent, ContinentDetails, ContinentInput, ENTITY};
use atlas_db::repositories::ContinentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

fn validate_input(input: &ContinentInput) -> AppResult<()> {
    validation::require_name(&input.name)?;
    Ok(())
}

/// POST /api/v1/continent
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContinentInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_input(&input)?;

    let id = ContinentRepo::create(state.db.as_ref(), &input).await?;
    tracing::info!(continent_id = %id, name = %input.name, "Continent created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/continent/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContinentDetails>> {
    let continent = ContinentRepo::find_by_id(state.db.as_ref(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY }))?;
    Ok(Json(continent))
}

/// GET /api/v1/continents
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Continent>>> {
    let continents = ContinentRepo::list(state.db.as_ref()).await?;
    Ok(Json(continents))
}

/// PUT /api/v1/continent/{id}
///
/// Full replacement; answers 200 whether or not the id matched a row.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ContinentInput>,
) -> AppResult<Json<StatusResponse>> {
    validate_input(&input)?;

    let matched = ContinentRepo::update(state.db.as_ref(), &id, &input).await?;
    tracing::info!(continent_id = %id, matched, "Continent updated");

    Ok(Json(StatusResponse::UPDATED))
}

/// DELETE /api/v1/continent/{id}
///
/// Answers 200 whether or not the id matched a row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let removed = ContinentRepo::delete(state.db.as_ref(), &id).await?;
    tracing::info!(continent_id = %id, removed, "Continent deleted");

    Ok(Json(StatusResponse::DELETED))
}
