use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::van_request_dto::{CreateVanRequestRequest, VanRequestResponse};
use crate::models::van::VanStatus;
use crate::models::van_request::RequestStatus;
use crate::repositories::child_repository::ChildRepository;
use crate::repositories::van_repository::VanRepository;
use crate::repositories::van_request_repository::VanRequestRepository;
use crate::utils::errors::AppError;

pub struct VanRequestController {
    requests: VanRequestRepository,
    children: ChildRepository,
    vans: VanRepository,
}

impl VanRequestController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            requests: VanRequestRepository::new(pool.clone()),
            children: ChildRepository::new(pool.clone()),
            vans: VanRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVanRequestRequest,
    ) -> Result<ApiResponse<VanRequestResponse>, AppError> {
        let child = self
            .children
            .find_by_id(request.child_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Niño no encontrado".to_string()))?;

        if child.parent_id != request.parent_id {
            return Err(AppError::Forbidden(
                "El niño no pertenece a este padre".to_string(),
            ));
        }

        let van = self
            .vans
            .find_by_id(request.van_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        if van.van_status != VanStatus::Approved {
            return Err(AppError::BadRequest(
                "La van no está aprobada para el servicio".to_string(),
            ));
        }

        let created = self
            .requests
            .create(request.child_id, request.van_id, request.parent_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Solicitud enviada exitosamente".to_string(),
        ))
    }

    pub async fn list_by_van(&self, van_id: Uuid) -> Result<Vec<VanRequestResponse>, AppError> {
        let requests = self.requests.find_by_van(van_id).await?;
        Ok(requests.into_iter().map(Into::into).collect())
    }

    /// Aprobar: asigna el niño a la van si queda asiento libre
    pub async fn approve(&self, id: Uuid) -> Result<ApiResponse<VanRequestResponse>, AppError> {
        let pending = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        let van = self
            .vans
            .find_by_id(pending.van_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        let seated = self.children.count_active_on_van(van.id).await?;
        if seated >= van.seating_capacity as i64 {
            return Err(AppError::Conflict(
                "La van ya está a capacidad completa".to_string(),
            ));
        }

        let resolved = self
            .requests
            .resolve(id, RequestStatus::Approved)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("La solicitud ya fue resuelta".to_string())
            })?;

        self.children.assign_van(resolved.child_id, van.id).await?;

        log::info!(
            "✅ Solicitud {} aprobada: niño {} asignado a van {}",
            id,
            resolved.child_id,
            van.id
        );

        Ok(ApiResponse::success_with_message(
            resolved.into(),
            "Solicitud aprobada exitosamente".to_string(),
        ))
    }

    pub async fn reject(&self, id: Uuid) -> Result<ApiResponse<VanRequestResponse>, AppError> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no encontrada".to_string()))?;

        let resolved = self
            .requests
            .resolve(id, RequestStatus::Rejected)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("La solicitud ya fue resuelta".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            resolved.into(),
            "Solicitud rechazada exitosamente".to_string(),
        ))
    }
}
