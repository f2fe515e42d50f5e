use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request para registrar un pago de un mes de un niño
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub child_id: Uuid,
    /// Mes en formato "YYYY-MM"
    pub month: String,
    pub amount: Decimal,
    pub system_fee: Decimal,
}

// Query param de mes para consultas de nómina
#[derive(Debug, Deserialize)]
pub struct PayrollMonthQuery {
    /// Mes en formato "YYYY-MM"
    pub month: String,
}

// Request para liquidar la nómina de un mes
#[derive(Debug, Deserialize)]
pub struct SettleRequest {
    /// Mes en formato "YYYY-MM"
    pub month: String,
    /// Correo del receptor para el resumen (opcional, best effort)
    pub email: Option<String>,
}

// Línea de nómina por niño
#[derive(Debug, Serialize)]
pub struct PayrollLineResponse {
    pub child_id: Uuid,
    pub total_amount: Decimal,
    pub total_system_fee: Decimal,
    pub total_driver_share: Decimal,
    pub total_owner_share: Decimal,
}

// Response de nómina de un receptor para un mes
#[derive(Debug, Serialize)]
pub struct PayrollResponse {
    pub recipient_id: Uuid,
    pub month_start: NaiveDate,
    pub lines: Vec<PayrollLineResponse>,
    /// Total que corresponde al receptor (parte conductor o parte dueño)
    pub recipient_total: Decimal,
}

// Response del settlement
#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub recipient_id: Uuid,
    pub month_start: NaiveDate,
    pub payments_settled: u64,
}
