use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::{
    LegStatus, RouteType, SessionStatus, SessionStudent, TransportSession,
};
use crate::utils::errors::AppError;

/// Fila del roster con el nombre del niño para la respuesta de sesión
#[derive(Debug, sqlx::FromRow)]
pub struct SessionStudentWithName {
    pub child_id: Uuid,
    pub full_name: String,
    pub pickup_order: i32,
    pub leg_status: LegStatus,
    pub marked_at: Option<chrono::DateTime<Utc>>,
}

pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear la sesión del día si no existe, en una sola sentencia atómica.
    /// Devuelve (sesión, true) si la insertó este llamado, (existente, false)
    /// si otra llamada ganó la carrera o ya existía.
    ///
    /// La unicidad la garantiza UNIQUE (van_id, service_date, route_type);
    /// no hay ventana check-then-act.
    pub async fn create_or_get(
        &self,
        van_id: Uuid,
        driver_id: Uuid,
        service_date: NaiveDate,
        route_type: RouteType,
    ) -> Result<(TransportSession, bool), AppError> {
        let inserted = sqlx::query_as::<_, TransportSession>(
            r#"
            INSERT INTO transport_sessions (id, van_id, driver_id, service_date, route_type, session_status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6)
            ON CONFLICT (van_id, service_date, route_type) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(van_id)
        .bind(driver_id)
        .bind(service_date)
        .bind(route_type)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(session) = inserted {
            return Ok((session, true));
        }

        let existing = sqlx::query_as::<_, TransportSession>(
            r#"
            SELECT * FROM transport_sessions
            WHERE van_id = $1 AND service_date = $2 AND route_type = $3
            "#,
        )
        .bind(van_id)
        .bind(service_date)
        .bind(route_type)
        .fetch_one(&self.pool)
        .await?;

        Ok((existing, false))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TransportSession>, AppError> {
        let session =
            sqlx::query_as::<_, TransportSession>("SELECT * FROM transport_sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(session)
    }

    /// Transición pending -> active. Idempotente: si ya está activa no toca nada.
    pub async fn activate(&self, id: Uuid) -> Result<TransportSession, AppError> {
        sqlx::query(
            r#"
            UPDATE transport_sessions
            SET session_status = 'active', started_at = $2
            WHERE id = $1 AND session_status = 'pending'
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sesión no encontrada".to_string()))
    }

    /// Transición active -> completed
    pub async fn complete(&self, id: Uuid) -> Result<TransportSession, AppError> {
        let session = sqlx::query_as::<_, TransportSession>(
            r#"
            UPDATE transport_sessions
            SET session_status = 'completed', completed_at = $2
            WHERE id = $1 AND session_status = 'active'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        session.ok_or_else(|| {
            AppError::Conflict("La sesión no está activa y no se puede completar".to_string())
        })
    }

    /// Transición pending|active -> cancelled
    pub async fn cancel(&self, id: Uuid) -> Result<TransportSession, AppError> {
        let session = sqlx::query_as::<_, TransportSession>(
            r#"
            UPDATE transport_sessions
            SET session_status = 'cancelled'
            WHERE id = $1 AND session_status IN ('pending', 'active')
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        session.ok_or_else(|| {
            AppError::Conflict("La sesión ya terminó y no se puede cancelar".to_string())
        })
    }

    /// Insertar el roster de la sesión con orden de recogida secuencial
    pub async fn insert_students(
        &self,
        session_id: Uuid,
        child_ids: &[Uuid],
    ) -> Result<Vec<SessionStudent>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut students = Vec::with_capacity(child_ids.len());

        for (order, child_id) in child_ids.iter().enumerate() {
            let student = sqlx::query_as::<_, SessionStudent>(
                r#"
                INSERT INTO session_students (id, session_id, child_id, pickup_order, leg_status)
                VALUES ($1, $2, $3, $4, 'pending')
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(session_id)
            .bind(child_id)
            .bind(order as i32)
            .fetch_one(&mut *tx)
            .await?;

            students.push(student);
        }

        tx.commit().await?;

        Ok(students)
    }

    pub async fn update_student_status(
        &self,
        session_id: Uuid,
        child_id: Uuid,
        status: LegStatus,
    ) -> Result<Option<SessionStudent>, AppError> {
        let student = sqlx::query_as::<_, SessionStudent>(
            r#"
            UPDATE session_students
            SET leg_status = $3, marked_at = $4
            WHERE session_id = $1 AND child_id = $2
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(child_id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    pub async fn students_with_names(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<SessionStudentWithName>, AppError> {
        let students = sqlx::query_as::<_, SessionStudentWithName>(
            r#"
            SELECT ss.child_id, c.full_name, ss.pickup_order, ss.leg_status, ss.marked_at
            FROM session_students ss
            JOIN children c ON c.id = ss.child_id
            WHERE ss.session_id = $1
            ORDER BY ss.pickup_order ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Estado actual sin transición (para guards en controllers)
    pub async fn status_of(&self, id: Uuid) -> Result<Option<SessionStatus>, AppError> {
        let status: Option<(SessionStatus,)> =
            sqlx::query_as("SELECT session_status FROM transport_sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(status.map(|s| s.0))
    }
}
