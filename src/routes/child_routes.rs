use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::child_controller::ChildController;
use crate::dto::child_dto::{
    ChildResponse, CreateAbsenceRequest, CreateChildRequest, UpdateChildRequest,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_child_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_child))
        .route("/:id", get(get_child))
        .route("/:id", put(update_child))
        .route("/:id", delete(retire_child))
        .route("/:id/absence", post(record_absence))
        .route("/parent/:parent_id", get(list_by_parent))
}

async fn create_child(
    State(state): State<AppState>,
    Json(request): Json<CreateChildRequest>,
) -> Result<Json<ApiResponse<ChildResponse>>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_child(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChildResponse>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<Uuid>,
) -> Result<Json<Vec<ChildResponse>>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    let response = controller.list_by_parent(parent_id).await?;
    Ok(Json(response))
}

async fn update_child(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateChildRequest>,
) -> Result<Json<ApiResponse<ChildResponse>>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn retire_child(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    controller.retire(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Niño dado de baja exitosamente"
    })))
}

async fn record_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateAbsenceRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ChildController::new(state.pool.clone());
    let response = controller.record_absence(id, request).await?;
    Ok(Json(response))
}
