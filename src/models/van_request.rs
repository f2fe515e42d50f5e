//! Modelo de VanRequest
//!
//! Solicitud de un padre para sumar a un niño a una van concreta.
//! La resuelve el dueño de la van (approve / reject).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la solicitud - mapea al ENUM request_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// VanRequest - mapea a la tabla van_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VanRequest {
    pub id: Uuid,
    pub child_id: Uuid,
    pub van_id: Uuid,
    pub parent_id: Uuid,
    pub request_status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}
