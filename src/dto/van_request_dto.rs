use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::van_request::RequestStatus;

// Request del padre para sumar a un niño a una van
#[derive(Debug, Deserialize)]
pub struct CreateVanRequestRequest {
    pub child_id: Uuid,
    pub van_id: Uuid,
    pub parent_id: Uuid,
}

// Response de solicitud
#[derive(Debug, Serialize)]
pub struct VanRequestResponse {
    pub id: Uuid,
    pub child_id: Uuid,
    pub van_id: Uuid,
    pub parent_id: Uuid,
    pub request_status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<crate::models::van_request::VanRequest> for VanRequestResponse {
    fn from(request: crate::models::van_request::VanRequest) -> Self {
        Self {
            id: request.id,
            child_id: request.child_id,
            van_id: request.van_id,
            parent_id: request.parent_id,
            request_status: request.request_status,
            created_at: request.created_at,
            resolved_at: request.resolved_at,
        }
    }
}
