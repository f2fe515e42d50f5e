//! Modelo de TransportSession / SessionStudent
//!
//! Una sesión representa un turno de una van en un día calendario concreto.
//! Existe a lo sumo una sesión por (van, fecha, tipo de ruta); la unicidad
//! la garantiza un constraint UNIQUE en la base.
//!
//! Máquina de estados de la sesión:
//! PENDING -> ACTIVE -> COMPLETED, o CANCELLED desde pending/active.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::config::ShiftKind;

/// Tipo de ruta - mapea al ENUM route_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "route_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    MorningPickup,
    EveningDropoff,
}

impl From<ShiftKind> for RouteType {
    fn from(kind: ShiftKind) -> Self {
        match kind {
            ShiftKind::MorningPickup => RouteType::MorningPickup,
            ShiftKind::EveningDropoff => RouteType::EveningDropoff,
        }
    }
}

/// Estado de la sesión - mapea al ENUM session_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "session_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

/// Estado del tramo de un niño dentro de la sesión - ENUM leg_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "leg_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LegStatus {
    Pending,
    PickedUp,
    DroppedOff,
    NotPresent,
}

/// TransportSession - mapea a la tabla transport_sessions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransportSession {
    pub id: Uuid,
    pub van_id: Uuid,
    pub driver_id: Uuid,
    pub service_date: NaiveDate,
    pub route_type: RouteType,
    pub session_status: SessionStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// SessionStudent - join de sesión y niño, con orden de recogida
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionStudent {
    pub id: Uuid,
    pub session_id: Uuid,
    pub child_id: Uuid,
    pub pickup_order: i32,
    pub leg_status: LegStatus,
    pub marked_at: Option<DateTime<Utc>>,
}
