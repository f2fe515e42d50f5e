use chrono::Local;
use uuid::Uuid;

use crate::cache::session_mirror::{SessionMirror, SessionSnapshot};
use crate::dto::session_dto::{
    MarkAttendanceRequest, SessionResponse, SessionStudentResponse, StartSessionRequest,
};
use crate::models::session::{RouteType, SessionStatus, TransportSession};
use crate::models::van::Van;
use crate::repositories::child_repository::ChildRepository;
use crate::repositories::session_repository::SessionRepository;
use crate::repositories::van_repository::VanRepository;
use crate::services::session_service::{derive_child_status, select_van};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct SessionController {
    sessions: SessionRepository,
    children: ChildRepository,
    vans: VanRepository,
    mirror: SessionMirror,
    config: crate::config::EnvironmentConfig,
}

impl SessionController {
    pub fn new(state: &AppState) -> Self {
        Self {
            sessions: SessionRepository::new(state.pool.clone()),
            children: ChildRepository::new(state.pool.clone()),
            vans: VanRepository::new(state.pool.clone()),
            mirror: state.mirror.clone(),
            config: state.config.clone(),
        }
    }

    /// Iniciar (o retomar) la sesión del turno actual para el conductor.
    /// Idempotente por (van, fecha, tipo de ruta): una segunda llamada
    /// devuelve la misma sesión sin crear filas nuevas.
    pub async fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<SessionResponse, AppError> {
        let van = self.resolve_van(request.driver_id, request.van_id).await?;

        let now = Local::now();
        let route_type: RouteType = self
            .config
            .shift_schedule
            .classify(now.time())
            .ok_or_else(|| {
                AppError::BadRequest("La hora actual está fuera de las ventanas de turno".to_string())
            })?
            .into();

        let service_date = now.date_naive();

        let (session, created) = self
            .sessions
            .create_or_get(van.id, request.driver_id, service_date, route_type)
            .await?;

        if created {
            log::info!(
                "🚌 Sesión {} creada para van {} ({:?}, {})",
                session.id,
                van.id,
                route_type,
                service_date
            );

            let roster = self
                .children
                .roster_for_session(van.id, service_date, route_type)
                .await?;
            let child_ids: Vec<Uuid> = roster.iter().map(|c| c.id).collect();

            let students = self.sessions.insert_students(session.id, &child_ids).await?;
            let session = self.sessions.activate(session.id).await?;

            self.mirror.publish_session(&session, &students).await;

            return self.build_response(session).await;
        }

        log::info!(
            "🔁 Sesión existente {} devuelta para van {} ({:?})",
            session.id,
            van.id,
            route_type
        );
        self.build_response(session).await
    }

    /// Marcar asistencia de un niño en una sesión activa
    pub async fn mark_attendance(
        &self,
        session_id: Uuid,
        request: MarkAttendanceRequest,
    ) -> Result<SessionResponse, AppError> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sesión no encontrada".to_string()))?;

        if session.session_status != SessionStatus::Active {
            return Err(AppError::Conflict(
                "La asistencia sólo se puede marcar en una sesión activa".to_string(),
            ));
        }

        let student = self
            .sessions
            .update_student_status(session_id, request.child_id, request.status.into())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("El niño no forma parte de esta sesión".to_string())
            })?;

        if let Some(child_status) = derive_child_status(student.leg_status, session.route_type) {
            self.children
                .update_status(request.child_id, child_status)
                .await?;
            self.mirror
                .publish_child_update(session_id, &student, child_status)
                .await;
        }

        self.build_response(session).await
    }

    pub async fn complete_session(&self, session_id: Uuid) -> Result<SessionResponse, AppError> {
        self.ensure_exists(session_id).await?;
        let session = self.sessions.complete(session_id).await?;
        self.mirror.clear_session(session_id).await;
        self.build_response(session).await
    }

    pub async fn cancel_session(&self, session_id: Uuid) -> Result<SessionResponse, AppError> {
        self.ensure_exists(session_id).await?;
        let session = self.sessions.cancel(session_id).await?;
        self.mirror.clear_session(session_id).await;
        self.build_response(session).await
    }

    /// Snapshot realtime de la sesión desde el espejo Redis.
    /// 404 cuando la sesión no existe o no tiene snapshot publicado.
    pub async fn live_session(&self, session_id: Uuid) -> Result<SessionSnapshot, AppError> {
        self.ensure_exists(session_id).await?;
        self.mirror
            .read_session(session_id)
            .await
            .ok_or_else(|| AppError::NotFound("La sesión no tiene snapshot en vivo".to_string()))
    }

    pub async fn get_session(&self, session_id: Uuid) -> Result<SessionResponse, AppError> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sesión no encontrada".to_string()))?;

        self.build_response(session).await
    }

    /// Resolver la van del conductor. Con varias asignadas el caller debe
    /// pasar van_id explícito; "la primera de la lista" no es una regla.
    async fn resolve_van(&self, driver_id: Uuid, van_id: Option<Uuid>) -> Result<Van, AppError> {
        let assigned = self.vans.find_approved_by_driver(driver_id).await?;
        select_van(assigned, van_id)
    }

    async fn ensure_exists(&self, session_id: Uuid) -> Result<(), AppError> {
        self.sessions
            .status_of(session_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Sesión no encontrada".to_string()))
    }

    async fn build_response(&self, session: TransportSession) -> Result<SessionResponse, AppError> {
        let students = self.sessions.students_with_names(session.id).await?;

        Ok(SessionResponse {
            id: session.id,
            van_id: session.van_id,
            driver_id: session.driver_id,
            service_date: session.service_date,
            route_type: session.route_type,
            session_status: session.session_status,
            started_at: session.started_at,
            completed_at: session.completed_at,
            students: students
                .into_iter()
                .map(|s| SessionStudentResponse {
                    child_id: s.child_id,
                    full_name: s.full_name,
                    pickup_order: s.pickup_order,
                    leg_status: s.leg_status,
                    marked_at: s.marked_at,
                })
                .collect(),
        })
    }
}
