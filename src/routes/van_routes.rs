use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::van_controller::VanController;
use crate::dto::common::ApiResponse;
use crate::dto::van_dto::{
    AssignDriverRequest, RegisterVanRequest, ReviewVanRequest, SetPathRequest, VanResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_van_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_van))
        .route("/:id", get(get_van))
        .route("/:id", delete(delete_van))
        .route("/:id/review", put(review_van))
        .route("/:id/driver", put(assign_driver))
        .route("/:id/path", put(set_path))
        .route("/owner/:owner_id", get(list_by_owner))
}

#[derive(Debug, Deserialize)]
struct OwnerQuery {
    owner_id: Uuid,
}

async fn register_van(
    State(state): State<AppState>,
    Json(request): Json<RegisterVanRequest>,
) -> Result<Json<ApiResponse<VanResponse>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn get_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VanResponse>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<Vec<VanResponse>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.list_by_owner(owner_id).await?;
    Ok(Json(response))
}

async fn review_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewVanRequest>,
) -> Result<Json<ApiResponse<VanResponse>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.review(id, request).await?;
    Ok(Json(response))
}

async fn assign_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<ApiResponse<VanResponse>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.assign_driver(id, request).await?;
    Ok(Json(response))
}

async fn set_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetPathRequest>,
) -> Result<Json<ApiResponse<VanResponse>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.set_path(id, request).await?;
    Ok(Json(response))
}

async fn delete_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VanController::new(state.pool.clone());
    controller.delete(id, query.owner_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Van eliminada exitosamente"
    })))
}
