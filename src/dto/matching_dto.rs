use serde::Serialize;
use uuid::Uuid;

// Van candidata que pasó los filtros de dirección y proximidad
#[derive(Debug, Serialize)]
pub struct MatchedVanResponse {
    pub van_id: Uuid,
    pub registration_number: String,
    pub seating_capacity: i32,
    pub path_id: Uuid,
    /// Distancia del pickup al waypoint más cercano de la ruta (km)
    pub nearest_waypoint_km: f64,
    /// Distancia del viaje usada para la tarifa (km)
    pub trip_distance_km: f64,
    /// Tarifa mensual estimada por estudiante, redondeada a 2 decimales
    pub estimated_fare: f64,
}

#[derive(Debug, Serialize)]
pub struct MatchingResponse {
    pub child_id: Uuid,
    pub school_id: Uuid,
    pub vans: Vec<MatchedVanResponse>,
}
