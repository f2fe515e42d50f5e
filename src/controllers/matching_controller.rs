use uuid::Uuid;

use crate::dto::matching_dto::{MatchedVanResponse, MatchingResponse};
use crate::repositories::child_repository::ChildRepository;
use crate::repositories::path_repository::PathRepository;
use crate::repositories::school_repository::SchoolRepository;
use crate::repositories::van_repository::VanRepository;
use crate::services::distance_service::DistanceService;
use crate::services::matching_service::{
    estimate_fare, nearest_waypoint_km, passes_direction_check, passes_proximity_check,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::geo::GeoPoint;

pub struct MatchingController {
    children: ChildRepository,
    schools: SchoolRepository,
    vans: VanRepository,
    paths: PathRepository,
    distance: DistanceService,
    direction_tolerance_km: f64,
    match_radius_km: f64,
}

impl MatchingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            children: ChildRepository::new(state.pool.clone()),
            schools: SchoolRepository::new(state.pool.clone()),
            vans: VanRepository::new(state.pool.clone()),
            paths: PathRepository::new(state.pool.clone()),
            distance: DistanceService::new(
                state.http_client.clone(),
                state.config.distance_api_url.clone(),
                state.config.distance_api_token.clone(),
            ),
            direction_tolerance_km: state.config.direction_tolerance_km,
            match_radius_km: state.config.match_radius_km,
        }
    }

    /// Vans cuya ruta sirve plausiblemente el viaje pickup -> colegio,
    /// ordenadas por cercanía al pickup. Cero coincidencias es un array
    /// vacío, no un error.
    pub async fn find_vans_for_child(&self, child_id: Uuid) -> Result<MatchingResponse, AppError> {
        let child = self
            .children
            .find_by_id(child_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Niño no encontrado".to_string()))?;

        let school = self
            .schools
            .find_by_id(child.school_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Colegio no encontrado".to_string()))?;

        let gate = match (school.gate_lat, school.gate_lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => {
                return Err(AppError::BadRequest(
                    "El colegio no tiene coordenadas de portón configuradas".to_string(),
                ))
            }
        };

        let pickup = GeoPoint::new(child.pickup_lat, child.pickup_lng);

        let candidates = self.vans.find_matching_candidates().await?;
        log::info!(
            "🔍 Matching para niño {}: {} vans candidatas",
            child_id,
            candidates.len()
        );

        // Las rutas se cargan en paralelo; el filtrado geométrico es puro
        let loaded = futures::future::try_join_all(candidates.into_iter().map(|van| async move {
            match van.path_id {
                Some(path_id) => {
                    let waypoints = self.paths.waypoints_for_path(path_id).await?;
                    Ok::<_, AppError>(Some((van, path_id, waypoints)))
                }
                None => Ok(None),
            }
        }))
        .await?;

        let mut survivors = Vec::new();
        for (van, path_id, waypoints) in loaded.into_iter().flatten() {
            if waypoints.len() < 2 {
                continue;
            }

            if !passes_direction_check(pickup, gate, &waypoints, self.direction_tolerance_km) {
                continue;
            }

            if !passes_proximity_check(pickup, gate, &waypoints, self.match_radius_km) {
                continue;
            }

            let nearest = nearest_waypoint_km(pickup, &waypoints);
            survivors.push((van, path_id, nearest));
        }

        // La distancia del viaje es pickup -> portón, igual para todas las
        // sobrevivientes; la tarifa varía por la tarifa de cada van.
        let mut vans = Vec::with_capacity(survivors.len());
        if !survivors.is_empty() {
            let trip_distance_km = self.distance.trip_distance_km(pickup, gate).await?;

            for (van, path_id, nearest) in survivors {
                vans.push(MatchedVanResponse {
                    van_id: van.id,
                    registration_number: van.registration_number,
                    seating_capacity: van.seating_capacity,
                    path_id,
                    nearest_waypoint_km: nearest,
                    trip_distance_km,
                    estimated_fare: estimate_fare(trip_distance_km, van.per_km_rate),
                });
            }
        }

        vans.sort_by(|a, b| {
            a.nearest_waypoint_km
                .partial_cmp(&b.nearest_waypoint_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        log::info!(
            "✅ Matching para niño {}: {} vans calificaron",
            child_id,
            vans.len()
        );

        Ok(MatchingResponse {
            child_id,
            school_id: school.id,
            vans,
        })
    }
}
