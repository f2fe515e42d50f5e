//! Modelo de Path / Waypoint
//!
//! Una ruta es una secuencia ordenada de puntos geográficos. El orden lo da
//! el campo `position` (monótono creciente). Una ruta con menos de 2 puntos
//! no participa del matching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::geo::GeoPoint;

/// Path - mapea a la tabla paths
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Path {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Waypoint - mapea a la tabla waypoints, ordenado por `position`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Waypoint {
    pub id: Uuid,
    pub path_id: Uuid,
    pub position: i32,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
