use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::resume::{Message, Resume, ResumeCreate, ResumeUpdate, ResumesPublic};
use crate::resumes::access::{ensure_can_access, list_scope};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

fn not_found() -> AppError {
    AppError::NotFound("Resume not found".to_string())
}

/// Loads the row and checks the caller may touch it. NotFound wins over PermissionDenied.
async fn load_accessible(state: &AppState, user: &CurrentUser, id: i64) -> Result<Resume, AppError> {
    let resume = state.resumes.get(id).await?.ok_or_else(not_found)?;
    ensure_can_access(&user.0, &resume)?;
    Ok(resume)
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> Result<Json<ResumesPublic>, AppError> {
    let (data, count) = state
        .resumes
        .list(list_scope(&user.0), page.skip.into(), page.limit.into())
        .await?;
    Ok(Json(ResumesPublic { data, count }))
}

/// GET /resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(load_accessible(&state, &user, id).await?))
}

/// POST /resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<ResumeCreate>,
) -> Result<Json<Resume>, AppError> {
    let resume = state.resumes.create(&req, user.0.id).await?;
    info!("Created resume {} for user {}", resume.id, user.0.id);
    Ok(Json(resume))
}

/// PUT /resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<ResumeUpdate>,
) -> Result<Json<Resume>, AppError> {
    let mut resume = load_accessible(&state, &user, id).await?;
    req.apply_to(&mut resume);

    // The row can vanish between the read and the write.
    let updated = state.resumes.update(&resume).await?.ok_or_else(not_found)?;
    Ok(Json(updated))
}

/// DELETE /resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    load_accessible(&state, &user, id).await?;
    if !state.resumes.delete(id).await? {
        return Err(not_found());
    }
    info!("Deleted resume {id} (by user {})", user.0.id);
    Ok(Json(Message {
        message: "Resume deleted successfully".to_string(),
    }))
}
