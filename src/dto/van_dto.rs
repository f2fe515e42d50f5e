use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::van::VanStatus;
use crate::utils::validation::validate_registration_number;

// Request para registrar una van (queda en estado pending)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterVanRequest {
    pub owner_id: Uuid,

    #[validate(custom = "validate_registration_number")]
    pub registration_number: String,

    #[validate(range(min = 4, max = 30))]
    pub seating_capacity: i32,

    pub per_km_rate: Decimal,

    /// Porcentaje del conductor, 0..=100
    pub salary_percentage: Decimal,
}

// Request del admin para aprobar o rechazar una van
#[derive(Debug, Deserialize)]
pub struct ReviewVanRequest {
    pub approve: bool,
}

// Request para asignar conductor
#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub driver_id: Uuid,
}

// Un punto de la ruta de la van
// Las coordenadas se validan a mano en el controller
#[derive(Debug, Deserialize, Serialize)]
pub struct WaypointRequest {
    pub lat: f64,
    pub lng: f64,
}

// Request para fijar la ruta completa (reemplaza waypoints anteriores)
#[derive(Debug, Deserialize, Validate)]
pub struct SetPathRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,

    #[validate(length(min = 2))]
    pub waypoints: Vec<WaypointRequest>,
}

// Response de van
#[derive(Debug, Serialize)]
pub struct VanResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub registration_number: String,
    pub seating_capacity: i32,
    pub van_status: VanStatus,
    pub driver_id: Option<Uuid>,
    pub path_id: Option<Uuid>,
    pub per_km_rate: Decimal,
    pub salary_percentage: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::van::Van> for VanResponse {
    fn from(van: crate::models::van::Van) -> Self {
        Self {
            id: van.id,
            owner_id: van.owner_id,
            registration_number: van.registration_number,
            seating_capacity: van.seating_capacity,
            van_status: van.van_status,
            driver_id: van.driver_id,
            path_id: van.path_id,
            per_km_rate: van.per_km_rate,
            salary_percentage: van.salary_percentage,
            created_at: van.created_at,
        }
    }
}
