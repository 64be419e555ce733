//! Handlers for the country resource.

use atlas_core::error::CoreError;
use atlas_core::validation;
use atlas_db::models::country::{Country, CountryDetails, CountryInput, ENTITY};
use atlas_db::repositories::CountryRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

/// Both fields are required on create and on update.
fn validate_input(input: &CountryInput) -> AppResult<()> {
    validation::require_name(&input.name)?;
    validation::require_id("continent_id", input.continent_id)?;
    Ok(())
}

/// POST /api/v1/country
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CountryInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_input(&input)?;

    let id = CountryRepo::create(state.db.as_ref(), &input).await?;
    tracing::info!(
        country_id = %id,
        continent_id = input.continent_id,
        "Country created",
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/country/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CountryDetails>> {
    let country = CountryRepo::find_by_id(state.db.as_ref(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY }))?;
    Ok(Json(country))
}

/// GET /api/v1/countries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    let countries = CountryRepo::list(state.db.as_ref()).await?;
    Ok(Json(countries))
}

/// PUT /api/v1/country/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CountryInput>,
) -> AppResult<Json<StatusResponse>> {
    validate_input(&input)?;

    let matched = CountryRepo::update(state.db.as_ref(), &id, &input).await?;
    tracing::info!(country_id = %id, matched, "Country updated");

    Ok(Json(StatusResponse::UPDATED))
}

/// DELETE /api/v1/country/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let removed = CountryRepo::delete(state.db.as_ref(), &id).await?;
    tracing::info!(country_id = %id, removed, "Country deleted");

    Ok(Json(StatusResponse::DELETED))
}
