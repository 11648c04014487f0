use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use app_api::{DailyRequest, PeriodRequest};

use crate::{errors::HttpError, state::HttpState};

pub async fn usage_summary(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::usage_summary(&state.context)?;
    Ok(Json(response))
}

pub async fn usage_daily(
    State(state): State<HttpState>,
    Json(req): Json<DailyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::usage_daily(&state.context, req)?;
    Ok(Json(response))
}

pub async fn egress_daily(
    State(state): State<HttpState>,
    Json(req): Json<PeriodRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::egress_daily(&state.context, req)?;
    Ok(Json(response))
}

pub async fn capacity(
    State(state): State<HttpState>,
    Json(_): Json<app_api::EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::capacity(&state.context)?;
    Ok(Json(response))
}

pub async fn invoice(
    State(state): State<HttpState>,
    Json(req): Json<PeriodRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::invoice(&state.context, req)?;
    Ok(Json(response))
}

/// Fallback for everything outside `/api`: a small descriptor so a
/// browser poke shows what is running.
pub async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "storage-console",
        "api": [
            "/api/usage_summary",
            "/api/usage_daily",
            "/api/egress_daily",
            "/api/capacity",
            "/api/invoice",
        ],
    }))
}
