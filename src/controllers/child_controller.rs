use uuid::Uuid;
use validator::Validate;

use crate::dto::child_dto::{
    ChildResponse, CreateAbsenceRequest, CreateChildRequest, UpdateChildRequest,
};
use crate::dto::common::ApiResponse;
use crate::repositories::child_repository::ChildRepository;
use crate::repositories::school_repository::SchoolRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ChildController {
    children: ChildRepository,
    schools: SchoolRepository,
}

impl ChildController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            children: ChildRepository::new(pool.clone()),
            schools: SchoolRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateChildRequest,
    ) -> Result<ApiResponse<ChildResponse>, AppError> {
        request.validate()?;

        // El colegio tiene que existir antes de matricular
        self.schools
            .find_by_id(request.school_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Colegio no encontrado".to_string()))?;

        let child = self
            .children
            .create(
                request.parent_id,
                request.full_name,
                request.school_id,
                request.pickup_lat,
                request.pickup_lng,
                request.monthly_fee,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            child.into(),
            "Niño matriculado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ChildResponse, AppError> {
        let child = self
            .children
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Niño", &id.to_string()))?;

        Ok(child.into())
    }

    pub async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<ChildResponse>, AppError> {
        let children = self.children.find_by_parent(parent_id).await?;
        Ok(children.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateChildRequest,
    ) -> Result<ApiResponse<ChildResponse>, AppError> {
        request.validate()?;

        let child = self
            .children
            .update(
                id,
                request.full_name,
                request.pickup_lat,
                request.pickup_lng,
                request.monthly_fee,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            child.into(),
            "Niño actualizado exitosamente".to_string(),
        ))
    }

    /// Baja lógica: el niño deja de aparecer en rosters y matching
    pub async fn retire(&self, id: Uuid) -> Result<(), AppError> {
        self.children.soft_retire(id).await
    }

    pub async fn record_absence(
        &self,
        id: Uuid,
        request: CreateAbsenceRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        self.children
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Niño no encontrado".to_string()))?;

        self.children
            .create_absence(id, request.absence_date, request.route_type)
            .await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Ausencia registrada exitosamente".to_string(),
        ))
    }
}
