use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::session::{LegStatus, RouteType, SessionStatus};

// Request para iniciar una sesión de transporte
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub driver_id: Uuid,
    /// Obligatorio sólo cuando el conductor tiene más de una van asignada
    pub van_id: Option<Uuid>,
}

// Request para marcar asistencia de un niño en la sesión
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub child_id: Uuid,
    pub status: AttendanceStatus,
}

/// Estados admisibles al marcar asistencia
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    PickedUp,
    DroppedOff,
    NotPresent,
}

impl From<AttendanceStatus> for LegStatus {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::PickedUp => LegStatus::PickedUp,
            AttendanceStatus::DroppedOff => LegStatus::DroppedOff,
            AttendanceStatus::NotPresent => LegStatus::NotPresent,
        }
    }
}

// Niño dentro de la respuesta de sesión
#[derive(Debug, Serialize)]
pub struct SessionStudentResponse {
    pub child_id: Uuid,
    pub full_name: String,
    pub pickup_order: i32,
    pub leg_status: LegStatus,
    pub marked_at: Option<DateTime<Utc>>,
}

// Response de sesión con su roster
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub van_id: Uuid,
    pub driver_id: Uuid,
    pub service_date: NaiveDate,
    pub route_type: RouteType,
    pub session_status: SessionStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub students: Vec<SessionStudentResponse>,
}
