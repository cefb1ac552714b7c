use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use registrar::{Confirmation, Roster};
use super::AppState;
use crate::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Roster>, ApiError> {
    let roster = registrar::list_activities(&state.pool).await?;
    Ok(Json(roster))
}

pub async fn signup(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let Query(params) = params?;
    let confirmation = registrar::signup(&state.pool, &activity_name, &params.email).await?;
    Ok(Json(confirmation))
}

pub async fn unregister(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let Query(params) = params?;
    let confirmation = registrar::unregister(&state.pool, &activity_name, &params.email).await?;
    Ok(Json(confirmation))
}
