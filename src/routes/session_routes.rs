use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::cache::session_mirror::SessionSnapshot;
use crate::controllers::session_controller::SessionController;
use crate::dto::session_dto::{MarkAttendanceRequest, SessionResponse, StartSessionRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_session_router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_session))
        .route("/:id", get(get_session))
        .route("/:id/live", get(live_session))
        .route("/:id/attendance", post(mark_attendance))
        .route("/:id/complete", post(complete_session))
        .route("/:id/cancel", post(cancel_session))
}

async fn start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.start_session(request).await?;
    Ok(Json(response))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.get_session(id).await?;
    Ok(Json(response))
}

async fn live_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.live_session(id).await?;
    Ok(Json(response))
}

async fn mark_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.mark_attendance(id, request).await?;
    Ok(Json(response))
}

async fn complete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.complete_session(id).await?;
    Ok(Json(response))
}

async fn cancel_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = SessionController::new(&state);
    let response = controller.cancel_session(id).await?;
    Ok(Json(response))
}
