//! Handler functions for awarding points and reading a student's ledger.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::models::{CreatePointRequest, PointTransactionResponse, StudentPointsResponse};
use crate::api::ApiJson;
use crate::auth::AuthenticatedTeacher;
use crate::errors::AppResult;
use crate::services::ledger::{self, NewTransaction};
use crate::state::AppState;

pub async fn create_point(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    ApiJson(req): ApiJson<CreatePointRequest>,
) -> AppResult<Json<PointTransactionResponse>> {
    let new = NewTransaction {
        student_id: req.student_id,
        amount: req.amount,
        reason: req.reason,
    };
    let transaction = ledger::record_transaction(state.db.as_ref(), &teacher, new).await?;
    Ok(Json(transaction.into()))
}

pub async fn get_student_points(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    Path(student_id): Path<String>,
) -> AppResult<Json<StudentPointsResponse>> {
    let points = ledger::student_points(state.db.as_ref(), &teacher, &student_id).await?;
    Ok(Json(points.into()))
}
