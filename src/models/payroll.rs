//! Modelo de Payment / nómina
//!
//! Un pago se registra contra un niño para un mes y se divide en fee del
//! sistema, parte del conductor y parte del dueño según el porcentaje
//! almacenado en la van. La nómina agrega pagos por receptor y mes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del pago - mapea al ENUM payment_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// Payment - mapea a la tabla payments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub child_id: Uuid,
    pub van_id: Uuid,
    pub driver_id: Uuid,
    pub owner_id: Uuid,
    /// Primer día del mes al que corresponde el pago
    pub month_start: NaiveDate,
    pub amount: Decimal,
    pub system_fee: Decimal,
    pub driver_share: Decimal,
    pub owner_share: Decimal,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub settled_at: Option<DateTime<Utc>>,
}

/// Fila agregada de nómina por niño para un receptor y un mes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PayrollLine {
    pub child_id: Uuid,
    pub total_amount: Decimal,
    pub total_system_fee: Decimal,
    pub total_driver_share: Decimal,
    pub total_owner_share: Decimal,
}
