//! Modelo de School

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// School - mapea a la tabla schools
///
/// Las coordenadas del portón pueden faltar si el colegio todavía no fue
/// geocodificado; el matching responde 400 en ese caso.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub gate_lat: Option<f64>,
    pub gate_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}
