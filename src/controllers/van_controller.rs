use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::van_dto::{
    AssignDriverRequest, RegisterVanRequest, ReviewVanRequest, SetPathRequest, VanResponse,
};
use crate::models::van::VanStatus;
use crate::repositories::path_repository::PathRepository;
use crate::repositories::van_repository::VanRepository;
use crate::utils::errors::{bad_request_error, conflict_error, AppError};
use crate::utils::validation::{validate_latitude, validate_longitude};

pub struct VanController {
    vans: VanRepository,
    paths: PathRepository,
}

impl VanController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vans: VanRepository::new(pool.clone()),
            paths: PathRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterVanRequest,
    ) -> Result<ApiResponse<VanResponse>, AppError> {
        request.validate()?;

        if self
            .vans
            .registration_exists(request.registration_number.trim())
            .await?
        {
            return Err(conflict_error(
                "Van",
                "registration_number",
                request.registration_number.trim(),
            ));
        }

        let van = self
            .vans
            .create(
                request.owner_id,
                request.registration_number.trim().to_string(),
                request.seating_capacity,
                request.per_km_rate,
                request.salary_percentage,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            van.into(),
            "Van registrada, pendiente de aprobación".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VanResponse, AppError> {
        let van = self
            .vans
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        Ok(van.into())
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<VanResponse>, AppError> {
        let vans = self.vans.find_by_owner(owner_id).await?;
        Ok(vans.into_iter().map(Into::into).collect())
    }

    /// Revisión del admin: aprobar o rechazar una van pendiente
    pub async fn review(
        &self,
        id: Uuid,
        request: ReviewVanRequest,
    ) -> Result<ApiResponse<VanResponse>, AppError> {
        let status = if request.approve {
            VanStatus::Approved
        } else {
            VanStatus::Rejected
        };

        let van = self.vans.set_status(id, status).await?;

        log::info!("🛡️ Van {} revisada: {:?}", id, status);

        Ok(ApiResponse::success_with_message(
            van.into(),
            "Revisión de la van registrada".to_string(),
        ))
    }

    pub async fn assign_driver(
        &self,
        id: Uuid,
        request: AssignDriverRequest,
    ) -> Result<ApiResponse<VanResponse>, AppError> {
        let van = self.vans.assign_driver(id, request.driver_id).await?;

        Ok(ApiResponse::success_with_message(
            van.into(),
            "Conductor asignado exitosamente".to_string(),
        ))
    }

    /// Reemplazar la ruta de la van. El orden de los waypoints del request
    /// es el orden de la ruta.
    pub async fn set_path(
        &self,
        id: Uuid,
        request: SetPathRequest,
    ) -> Result<ApiResponse<VanResponse>, AppError> {
        request.validate()?;

        for waypoint in &request.waypoints {
            if validate_latitude(waypoint.lat).is_err() || validate_longitude(waypoint.lng).is_err()
            {
                return Err(bad_request_error("Las coordenadas de los waypoints están fuera de rango"));
            }
        }

        self.vans
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        let points: Vec<(f64, f64)> = request
            .waypoints
            .iter()
            .map(|w| (w.lat, w.lng))
            .collect();

        let path = self
            .paths
            .create_with_waypoints(request.name, &points)
            .await?;

        let van = self.vans.set_path(id, path.id).await?;

        Ok(ApiResponse::success_with_message(
            van.into(),
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        self.vans.delete(id, owner_id).await
    }
}
