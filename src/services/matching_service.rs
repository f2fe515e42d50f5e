//! Filtro de matching van-niño
//!
//! Dadas las coordenadas de pickup del niño y del portón del colegio, la
//! ruta de una van califica cuando:
//!
//! 1. Tiene al menos 2 waypoints.
//! 2. Chequeo de dirección: la primera parada está a menos de la tolerancia
//!    del pickup Y la última a menos de la tolerancia del portón.
//! 3. Chequeo de proximidad: algún waypoint cae dentro del radio del pickup
//!    Y algún waypoint (puede ser otro) dentro del radio del portón.
//!
//! Ambos umbrales son configurables (DIRECTION_TOLERANCE_KM / MATCH_RADIUS_KM);
//! una sola tolerancia reemplaza las variantes 5/10 km del flujo histórico.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::path::Waypoint;
use crate::utils::geo::{haversine_distance, is_within_radius, GeoPoint};

/// Chequeo de dirección: primera parada vs pickup, última vs portón
pub fn passes_direction_check(
    pickup: GeoPoint,
    gate: GeoPoint,
    waypoints: &[Waypoint],
    tolerance_km: f64,
) -> bool {
    if waypoints.len() < 2 {
        return false;
    }

    let first = waypoints.first().map(|w| w.point());
    let last = waypoints.last().map(|w| w.point());

    match (first, last) {
        (Some(first), Some(last)) => {
            haversine_distance(pickup, first) <= tolerance_km
                && haversine_distance(gate, last) <= tolerance_km
        }
        _ => false,
    }
}

/// Chequeo de proximidad: los lados se evalúan de forma independiente,
/// pueden satisfacerse con waypoints distintos.
pub fn passes_proximity_check(
    pickup: GeoPoint,
    gate: GeoPoint,
    waypoints: &[Waypoint],
    radius_km: f64,
) -> bool {
    if waypoints.len() < 2 {
        return false;
    }

    let near_pickup = waypoints
        .iter()
        .any(|w| is_within_radius(w.point(), pickup, radius_km));
    let near_gate = waypoints
        .iter()
        .any(|w| is_within_radius(w.point(), gate, radius_km));

    near_pickup && near_gate
}

/// Distancia del pickup al waypoint más cercano de la ruta (km).
/// Usada para ordenar los resultados de forma ascendente.
pub fn nearest_waypoint_km(pickup: GeoPoint, waypoints: &[Waypoint]) -> f64 {
    waypoints
        .iter()
        .map(|w| haversine_distance(pickup, w.point()))
        .fold(f64::INFINITY, f64::min)
}

/// Tarifa estimada: distancia del viaje por la tarifa por estudiante,
/// redondeada a 2 decimales.
pub fn estimate_fare(trip_distance_km: f64, per_km_rate: Decimal) -> f64 {
    let distance = Decimal::from_f64(trip_distance_km).unwrap_or_default();
    (distance * per_km_rate)
        .round_dp(2)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn waypoints(points: &[(f64, f64)]) -> Vec<Waypoint> {
        let path_id = Uuid::new_v4();
        points
            .iter()
            .enumerate()
            .map(|(i, (lat, lng))| Waypoint {
                id: Uuid::new_v4(),
                path_id,
                position: i as i32,
                lat: *lat,
                lng: *lng,
            })
            .collect()
    }

    // Escenario Colombo: pickup (6.9, 79.9), portón (6.95, 79.95)
    const PICKUP: GeoPoint = GeoPoint { lat: 6.9, lng: 79.9 };
    const GATE: GeoPoint = GeoPoint { lat: 6.95, lng: 79.95 };

    #[test]
    fn test_direction_check_accepts_aligned_route() {
        let route = waypoints(&[(6.91, 79.91), (6.92, 79.92), (6.93, 79.93), (6.94, 79.94)]);
        assert!(passes_direction_check(PICKUP, GATE, &route, 10.0));
    }

    #[test]
    fn test_direction_check_rejects_route_ending_far_from_gate() {
        // Termina en Kandy, lejos del portón
        let route = waypoints(&[(6.91, 79.91), (7.2906, 80.6337)]);
        assert!(!passes_direction_check(PICKUP, GATE, &route, 10.0));
    }

    #[test]
    fn test_direction_check_rejects_short_path() {
        let route = waypoints(&[(6.91, 79.91)]);
        assert!(!passes_direction_check(PICKUP, GATE, &route, 10.0));
    }

    #[test]
    fn test_proximity_check_accepts_nearby_route() {
        let route = waypoints(&[(6.91, 79.91), (6.94, 79.94)]);
        assert!(passes_proximity_check(PICKUP, GATE, &route, 40.0));
    }

    #[test]
    fn test_proximity_check_rejects_route_in_another_city() {
        // Ruta entera en Jaffna, a cientos de km
        let route = waypoints(&[(9.66, 80.01), (9.67, 80.02), (9.68, 80.03)]);
        assert!(!passes_proximity_check(PICKUP, GATE, &route, 40.0));
    }

    #[test]
    fn test_proximity_sides_can_use_different_waypoints() {
        // Primer waypoint cerca del pickup, último cerca del portón,
        // ninguno cerca de ambos con un radio chico
        let route = waypoints(&[(6.905, 79.905), (6.945, 79.945)]);
        assert!(passes_proximity_check(PICKUP, GATE, &route, 2.0));
    }

    #[test]
    fn test_nearest_waypoint_ordering() {
        let close = waypoints(&[(6.901, 79.901), (6.94, 79.94)]);
        let far = waypoints(&[(6.93, 79.93), (6.94, 79.94)]);

        assert!(nearest_waypoint_km(PICKUP, &close) < nearest_waypoint_km(PICKUP, &far));
    }

    #[test]
    fn test_estimate_fare_rounded_to_two_decimals() {
        let fare = estimate_fare(10.0, Decimal::new(150, 1)); // 15.0 por km
        assert_eq!(fare, 150.0);

        let fare = estimate_fare(2.0, Decimal::new(10555, 3)); // 10.555
        assert_eq!(fare, 21.11);
    }
}
