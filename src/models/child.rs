//! Modelo de Child
//!
//! Este módulo contiene el struct Child y su estado de transporte.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::session::RouteType;

/// Estado de transporte del niño - mapea al ENUM child_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "child_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChildStatus {
    AtHome,
    OnVan,
    AtSchool,
}

/// Child principal - mapea a la tabla children
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Child {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub full_name: String,
    pub school_id: Uuid,
    pub van_id: Option<Uuid>,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub child_status: ChildStatus,
    /// Baja lógica al retirar la matrícula
    pub is_active: bool,
    pub monthly_fee: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Ausencia registrada para un niño en una fecha y tipo de ruta
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Absence {
    pub id: Uuid,
    pub child_id: Uuid,
    pub absence_date: NaiveDate,
    pub route_type: RouteType,
    pub created_at: DateTime<Utc>,
}
