//! Modelo de Van
//!
//! Este módulo contiene el struct Van y sus estados de aprobación.
//! Una van pertenece a una cuenta de servicio (owner) y opcionalmente
//! tiene un conductor asignado y una ruta (path).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de aprobación de la van - mapea al ENUM van_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "van_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VanStatus {
    Pending,
    Approved,
    Rejected,
}

/// Van principal - mapea a la tabla vans
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Van {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub registration_number: String,
    pub seating_capacity: i32,
    pub van_status: VanStatus,
    pub driver_id: Option<Uuid>,
    pub path_id: Option<Uuid>,
    /// Tarifa por km por estudiante
    pub per_km_rate: Decimal,
    /// Porcentaje del salario del conductor sobre (monto - fee del sistema)
    pub salary_percentage: Decimal,
    pub created_at: DateTime<Utc>,
}
