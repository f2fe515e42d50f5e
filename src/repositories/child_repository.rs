use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::child::{Absence, Child, ChildStatus};
use crate::models::session::RouteType;
use crate::utils::errors::AppError;

pub struct ChildRepository {
    pool: PgPool,
}

impl ChildRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        parent_id: Uuid,
        full_name: String,
        school_id: Uuid,
        pickup_lat: f64,
        pickup_lng: f64,
        monthly_fee: Decimal,
    ) -> Result<Child, AppError> {
        let child = sqlx::query_as::<_, Child>(
            r#"
            INSERT INTO children (id, parent_id, full_name, school_id, pickup_lat, pickup_lng, child_status, is_active, monthly_fee, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'at_home', TRUE, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(parent_id)
        .bind(full_name)
        .bind(school_id)
        .bind(pickup_lat)
        .bind(pickup_lng)
        .bind(monthly_fee)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(child)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, AppError> {
        let child = sqlx::query_as::<_, Child>("SELECT * FROM children WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(child)
    }

    pub async fn find_by_parent(&self, parent_id: Uuid) -> Result<Vec<Child>, AppError> {
        let children = sqlx::query_as::<_, Child>(
            "SELECT * FROM children WHERE parent_id = $1 ORDER BY created_at DESC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(children)
    }

    pub async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        pickup_lat: Option<f64>,
        pickup_lng: Option<f64>,
        monthly_fee: Option<Decimal>,
    ) -> Result<Child, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Niño no encontrado".to_string()))?;

        let child = sqlx::query_as::<_, Child>(
            r#"
            UPDATE children
            SET full_name = $2, pickup_lat = $3, pickup_lng = $4, monthly_fee = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(pickup_lat.unwrap_or(current.pickup_lat))
        .bind(pickup_lng.unwrap_or(current.pickup_lng))
        .bind(monthly_fee.unwrap_or(current.monthly_fee))
        .fetch_one(&self.pool)
        .await?;

        Ok(child)
    }

    /// Baja lógica al retirar la matrícula
    pub async fn soft_retire(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE children SET is_active = FALSE, van_id = NULL WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Niño no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn assign_van(&self, id: Uuid, van_id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE children SET van_id = $2 WHERE id = $1")
            .bind(id)
            .bind(van_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn update_status(&self, id: Uuid, status: ChildStatus) -> Result<(), AppError> {
        sqlx::query("UPDATE children SET child_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Niños activos de la van sin ausencia registrada para (fecha, ruta)
    pub async fn roster_for_session(
        &self,
        van_id: Uuid,
        date: NaiveDate,
        route_type: RouteType,
    ) -> Result<Vec<Child>, AppError> {
        let children = sqlx::query_as::<_, Child>(
            r#"
            SELECT c.* FROM children c
            WHERE c.van_id = $1
              AND c.is_active = TRUE
              AND NOT EXISTS (
                  SELECT 1 FROM absences a
                  WHERE a.child_id = c.id
                    AND a.absence_date = $2
                    AND a.route_type = $3
              )
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(van_id)
        .bind(date)
        .bind(route_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(children)
    }

    pub async fn count_active_on_van(&self, van_id: Uuid) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM children WHERE van_id = $1 AND is_active = TRUE",
        )
        .bind(van_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn create_absence(
        &self,
        child_id: Uuid,
        absence_date: NaiveDate,
        route_type: RouteType,
    ) -> Result<Absence, AppError> {
        let absence = sqlx::query_as::<_, Absence>(
            r#"
            INSERT INTO absences (id, child_id, absence_date, route_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (child_id, absence_date, route_type) DO UPDATE SET child_id = EXCLUDED.child_id
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(child_id)
        .bind(absence_date)
        .bind(route_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(absence)
    }
}
