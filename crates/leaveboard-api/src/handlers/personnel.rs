//! Personnel handlers: register and view.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::RegisterPersonnelRequest;
use crate::dto::response::{PersonnelResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthPersonnel, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// POST /api/personnel
pub async fn register(
    State(state): State<AppState>,
    auth: AuthPersonnel,
    ValidatedJson(req): ValidatedJson<RegisterPersonnelRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let issued = state
        .personnel_service
        .register_by(auth.context(), req.into_input()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: issued.token,
        }),
    ))
}

/// GET /api/personnel/{personnel_id}
pub async fn get_personnel(
    State(state): State<AppState>,
    auth: AuthPersonnel,
    Path(personnel_id): Path<String>,
) -> ApiResult<Json<PersonnelResponse>> {
    let personnel_id = parse_uuid(&personnel_id)?;
    let personnel = state
        .personnel_service
        .get_personnel(auth.context(), personnel_id)
        .await?;

    Ok(Json(PersonnelResponse { personnel }))
}
