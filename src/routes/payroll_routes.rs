use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::payroll_controller::PayrollController;
use crate::dto::common::ApiResponse;
use crate::dto::payroll_dto::{
    PayrollMonthQuery, PayrollResponse, RecordPaymentRequest, SettleRequest, SettlementResponse,
};
use crate::repositories::payroll_repository::Recipient;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payroll_router() -> Router<AppState> {
    Router::new()
        .route("/payment", post(record_payment))
        .route("/driver/:id", get(driver_payroll))
        .route("/driver/:id/settle", post(settle_driver))
        .route("/owner/:id", get(owner_payroll))
        .route("/owner/:id/settle", post(settle_owner))
}

async fn record_payment(
    State(state): State<AppState>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = PayrollController::new(&state);
    let response = controller.record_payment(request).await?;
    Ok(Json(response))
}

async fn driver_payroll(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PayrollMonthQuery>,
) -> Result<Json<PayrollResponse>, AppError> {
    let controller = PayrollController::new(&state);
    let response = controller
        .payroll_for(Recipient::Driver, id, &query.month)
        .await?;
    Ok(Json(response))
}

async fn owner_payroll(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PayrollMonthQuery>,
) -> Result<Json<PayrollResponse>, AppError> {
    let controller = PayrollController::new(&state);
    let response = controller
        .payroll_for(Recipient::Owner, id, &query.month)
        .await?;
    Ok(Json(response))
}

async fn settle_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SettleRequest>,
) -> Result<Json<ApiResponse<SettlementResponse>>, AppError> {
    let controller = PayrollController::new(&state);
    let response = controller.settle(Recipient::Driver, id, request).await?;
    Ok(Json(response))
}

async fn settle_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SettleRequest>,
) -> Result<Json<ApiResponse<SettlementResponse>>, AppError> {
    let controller = PayrollController::new(&state);
    let response = controller.settle(Recipient::Owner, id, request).await?;
    Ok(Json(response))
}
