use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::child::ChildStatus;
use crate::models::session::RouteType;

// Request para matricular un niño
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChildRequest {
    pub parent_id: Uuid,

    #[validate(length(min = 2, max = 120))]
    pub full_name: String,

    pub school_id: Uuid,

    #[validate(range(min = -90.0, max = 90.0))]
    pub pickup_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub pickup_lng: f64,

    pub monthly_fee: Decimal,
}

// Request para actualizar los datos de un niño
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateChildRequest {
    #[validate(length(min = 2, max = 120))]
    pub full_name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub pickup_lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub pickup_lng: Option<f64>,

    pub monthly_fee: Option<Decimal>,
}

// Request para registrar una ausencia
#[derive(Debug, Deserialize)]
pub struct CreateAbsenceRequest {
    pub absence_date: NaiveDate,
    pub route_type: RouteType,
}

// Response de niño
#[derive(Debug, Serialize)]
pub struct ChildResponse {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub full_name: String,
    pub school_id: Uuid,
    pub van_id: Option<Uuid>,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub child_status: ChildStatus,
    pub is_active: bool,
    pub monthly_fee: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::child::Child> for ChildResponse {
    fn from(child: crate::models::child::Child) -> Self {
        Self {
            id: child.id,
            parent_id: child.parent_id,
            full_name: child.full_name,
            school_id: child.school_id,
            van_id: child.van_id,
            pickup_lat: child.pickup_lat,
            pickup_lng: child.pickup_lng,
            child_status: child.child_status,
            is_active: child.is_active,
            monthly_fee: child.monthly_fee,
            created_at: child.created_at,
        }
    }
}
