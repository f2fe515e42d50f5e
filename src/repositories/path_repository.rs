use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::path::{Path, Waypoint};
use crate::utils::errors::AppError;

pub struct PathRepository {
    pool: PgPool,
}

impl PathRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una ruta con sus waypoints en una transacción.
    /// El orden de los waypoints es el orden de llegada en el request.
    pub async fn create_with_waypoints(
        &self,
        name: String,
        points: &[(f64, f64)],
    ) -> Result<Path, AppError> {
        let mut tx = self.pool.begin().await?;

        let path = sqlx::query_as::<_, Path>(
            r#"
            INSERT INTO paths (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for (position, (lat, lng)) in points.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO waypoints (id, path_id, position, lat, lng)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(path.id)
            .bind(position as i32)
            .bind(lat)
            .bind(lng)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(path)
    }

    /// Waypoints de una ruta, ordenados por `position`
    pub async fn waypoints_for_path(&self, path_id: Uuid) -> Result<Vec<Waypoint>, AppError> {
        let waypoints = sqlx::query_as::<_, Waypoint>(
            "SELECT * FROM waypoints WHERE path_id = $1 ORDER BY position ASC",
        )
        .bind(path_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(waypoints)
    }
}
