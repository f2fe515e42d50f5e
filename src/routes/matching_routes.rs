use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::matching_controller::MatchingController;
use crate::dto::matching_dto::MatchingResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_matching_router() -> Router<AppState> {
    Router::new().route("/child/:child_id/vans", get(find_vans_for_child))
}

async fn find_vans_for_child(
    State(state): State<AppState>,
    Path(child_id): Path<Uuid>,
) -> Result<Json<MatchingResponse>, AppError> {
    let controller = MatchingController::new(&state);
    let response = controller.find_vans_for_child(child_id).await?;
    Ok(Json(response))
}
