use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::van_request::{RequestStatus, VanRequest};
use crate::utils::errors::AppError;

pub struct VanRequestRepository {
    pool: PgPool,
}

impl VanRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        child_id: Uuid,
        van_id: Uuid,
        parent_id: Uuid,
    ) -> Result<VanRequest, AppError> {
        let request = sqlx::query_as::<_, VanRequest>(
            r#"
            INSERT INTO van_requests (id, child_id, van_id, parent_id, request_status, created_at)
            VALUES ($1, $2, $3, $4, 'pending', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(child_id)
        .bind(van_id)
        .bind(parent_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VanRequest>, AppError> {
        let request = sqlx::query_as::<_, VanRequest>("SELECT * FROM van_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    pub async fn find_by_van(&self, van_id: Uuid) -> Result<Vec<VanRequest>, AppError> {
        let requests = sqlx::query_as::<_, VanRequest>(
            "SELECT * FROM van_requests WHERE van_id = $1 ORDER BY created_at DESC",
        )
        .bind(van_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Resolver una solicitud pendiente. Devuelve None si ya estaba resuelta.
    pub async fn resolve(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<VanRequest>, AppError> {
        let request = sqlx::query_as::<_, VanRequest>(
            r#"
            UPDATE van_requests
            SET request_status = $2, resolved_at = $3
            WHERE id = $1 AND request_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }
}
