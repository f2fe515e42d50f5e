use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::van::{Van, VanStatus};
use crate::utils::errors::AppError;

pub struct VanRepository {
    pool: PgPool,
}

impl VanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        registration_number: String,
        seating_capacity: i32,
        per_km_rate: Decimal,
        salary_percentage: Decimal,
    ) -> Result<Van, AppError> {
        let van = sqlx::query_as::<_, Van>(
            r#"
            INSERT INTO vans (id, owner_id, registration_number, seating_capacity, van_status, per_km_rate, salary_percentage, created_at)
            VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(registration_number)
        .bind(seating_capacity)
        .bind(per_km_rate)
        .bind(salary_percentage)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(van)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Van>, AppError> {
        let van = sqlx::query_as::<_, Van>("SELECT * FROM vans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(van)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Van>, AppError> {
        let vans = sqlx::query_as::<_, Van>(
            "SELECT * FROM vans WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vans)
    }

    /// Vans aprobadas de un conductor (asignación activa)
    pub async fn find_approved_by_driver(&self, driver_id: Uuid) -> Result<Vec<Van>, AppError> {
        let vans = sqlx::query_as::<_, Van>(
            "SELECT * FROM vans WHERE driver_id = $1 AND van_status = 'approved' ORDER BY created_at ASC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vans)
    }

    /// Candidatas para el matching: aprobadas, con conductor y con ruta
    pub async fn find_matching_candidates(&self) -> Result<Vec<Van>, AppError> {
        let vans = sqlx::query_as::<_, Van>(
            r#"
            SELECT * FROM vans
            WHERE van_status = 'approved'
              AND driver_id IS NOT NULL
              AND path_id IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vans)
    }

    pub async fn set_status(&self, id: Uuid, status: VanStatus) -> Result<Van, AppError> {
        let van = sqlx::query_as::<_, Van>(
            "UPDATE vans SET van_status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        Ok(van)
    }

    pub async fn assign_driver(&self, id: Uuid, driver_id: Uuid) -> Result<Van, AppError> {
        let van = sqlx::query_as::<_, Van>(
            "UPDATE vans SET driver_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        Ok(van)
    }

    pub async fn set_path(&self, id: Uuid, path_id: Uuid) -> Result<Van, AppError> {
        let van = sqlx::query_as::<_, Van>(
            "UPDATE vans SET path_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(path_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        Ok(van)
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let van = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        if van.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "La van no pertenece a esta cuenta".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn registration_exists(&self, registration_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vans WHERE registration_number = $1)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
