//! Handler functions for the class endpoints.
//!
//! Every route here requires an authenticated teacher; the class-scoped ones
//! go through the ownership chain in `services::ownership`.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::models::{
    AddStudentRequest, ClassDetailResponse, ClassListItem, ClassResponse, CreateClassRequest,
    LeaderboardEntry, StudentResponse,
};
use crate::api::ApiJson;
use crate::auth::AuthenticatedTeacher;
use crate::errors::AppResult;
use crate::services::{classroom, ledger};
use crate::state::AppState;

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    ApiJson(req): ApiJson<CreateClassRequest>,
) -> AppResult<Json<ClassResponse>> {
    let new = classroom::NewClass {
        name: req.name,
        grade: req.grade,
        class_number: req.class_number,
    };
    let class = classroom::create_class(state.db.as_ref(), &teacher, new).await?;
    Ok(Json(class.into()))
}

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
) -> AppResult<Json<Vec<ClassListItem>>> {
    let summaries = classroom::list_classes(state.db.as_ref(), &teacher).await?;
    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    Path(class_id): Path<String>,
) -> AppResult<Json<ClassDetailResponse>> {
    let detail = classroom::class_detail(state.db.as_ref(), &teacher, &class_id).await?;
    Ok(Json(detail.into()))
}

pub async fn add_student(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    Path(class_id): Path<String>,
    ApiJson(req): ApiJson<AddStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let new = classroom::NewStudent {
        name: req.name,
        student_number: req.student_number,
    };
    let student = classroom::add_student(state.db.as_ref(), &teacher, &class_id, new).await?;
    Ok(Json(student.into()))
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    AuthenticatedTeacher(teacher): AuthenticatedTeacher,
    Path(class_id): Path<String>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let ranked = ledger::leaderboard(state.db.as_ref(), &teacher, &class_id).await?;
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}
