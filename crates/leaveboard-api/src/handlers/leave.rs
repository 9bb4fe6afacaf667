//! Leave calendar handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use leaveboard_core::error::AppError;

use crate::dto::request::LeaveDayQuery;
use crate::dto::response::{LeaveResponse, LeavesResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthPersonnel, parse_uuid};
use crate::state::AppState;

/// GET /api/leaves?year=&month=&day=
pub async fn leaves_on_day(
    State(state): State<AppState>,
    auth: AuthPersonnel,
    query: Result<Query<LeaveDayQuery>, QueryRejection>,
) -> ApiResult<Json<LeavesResponse>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let leaves = state
        .leave_service
        .leaves_on(auth.context(), query.date()?)
        .await?;

    Ok(Json(LeavesResponse { leaves }))
}

/// GET /api/leaves/{leave_id}
pub async fn get_leave(
    State(state): State<AppState>,
    auth: AuthPersonnel,
    Path(leave_id): Path<String>,
) -> ApiResult<Json<LeaveResponse>> {
    let leave_id = parse_uuid(&leave_id)?;
    let leave = state
        .leave_service
        .get_leave(auth.context(), leave_id)
        .await?;

    Ok(Json(LeaveResponse { leave }))
}
