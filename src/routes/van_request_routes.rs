use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::van_request_controller::VanRequestController;
use crate::dto::common::ApiResponse;
use crate::dto::van_request_dto::{CreateVanRequestRequest, VanRequestResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_van_request_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_request))
        .route("/van/:van_id", get(list_by_van))
        .route("/:id/approve", post(approve_request))
        .route("/:id/reject", post(reject_request))
}

async fn create_request(
    State(state): State<AppState>,
    Json(request): Json<CreateVanRequestRequest>,
) -> Result<Json<ApiResponse<VanRequestResponse>>, AppError> {
    let controller = VanRequestController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_by_van(
    State(state): State<AppState>,
    Path(van_id): Path<Uuid>,
) -> Result<Json<Vec<VanRequestResponse>>, AppError> {
    let controller = VanRequestController::new(state.pool.clone());
    let response = controller.list_by_van(van_id).await?;
    Ok(Json(response))
}

async fn approve_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VanRequestResponse>>, AppError> {
    let controller = VanRequestController::new(state.pool.clone());
    let response = controller.approve(id).await?;
    Ok(Json(response))
}

async fn reject_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VanRequestResponse>>, AppError> {
    let controller = VanRequestController::new(state.pool.clone());
    let response = controller.reject(id).await?;
    Ok(Json(response))
}
