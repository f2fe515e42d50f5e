//! Espejo realtime de sesiones
//!
//! Proyección write-through de la sesión hacia Redis para los clientes de
//! tracking en vivo. Cada marca de asistencia reescribe el snapshot completo
//! bajo una sola clave, así el lector siempre ve el roster actualizado. La
//! proyección es at-least-once y last-write-wins: un fallo del espejo se
//! loguea y NUNCA falla la operación primaria. La divergencia tras un crash
//! queda acotada por la próxima escritura exitosa sobre la misma clave.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::child::ChildStatus;
use crate::models::session::{LegStatus, RouteType, SessionStatus, SessionStudent, TransportSession};

use super::redis_client::RedisClient;
use super::CacheOperations;

/// Snapshot de sesión publicado para los clientes en vivo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub van_id: Uuid,
    pub driver_id: Uuid,
    pub service_date: NaiveDate,
    pub route_type: RouteType,
    pub session_status: SessionStatus,
    pub children: Vec<ChildSnapshot>,
    pub updated_at: DateTime<Utc>,
}

/// Estado publicado de un niño dentro de la sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildSnapshot {
    pub child_id: Uuid,
    pub pickup_order: i32,
    pub leg_status: LegStatus,
    pub child_status: Option<ChildStatus>,
    pub updated_at: DateTime<Utc>,
}

/// Aplica una marca de asistencia sobre el snapshot. Si el niño no está en
/// el roster publicado el snapshot queda intacto.
fn apply_child_update(
    snapshot: &mut SessionSnapshot,
    student: &SessionStudent,
    child_status: ChildStatus,
) {
    let now = Utc::now();
    if let Some(child) = snapshot
        .children
        .iter_mut()
        .find(|c| c.child_id == student.child_id)
    {
        child.leg_status = student.leg_status;
        child.child_status = Some(child_status);
        child.updated_at = now;
        snapshot.updated_at = now;
    }
}

/// Espejo de sesiones sobre Redis
#[derive(Clone)]
pub struct SessionMirror {
    redis: RedisClient,
}

impl SessionMirror {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    /// Publicar el snapshot completo de una sesión recién creada.
    /// Best effort: el error se loguea y se descarta.
    pub async fn publish_session(&self, session: &TransportSession, roster: &[SessionStudent]) {
        let snapshot = SessionSnapshot {
            session_id: session.id,
            van_id: session.van_id,
            driver_id: session.driver_id,
            service_date: session.service_date,
            route_type: session.route_type,
            session_status: session.session_status,
            children: roster
                .iter()
                .map(|s| ChildSnapshot {
                    child_id: s.child_id,
                    pickup_order: s.pickup_order,
                    leg_status: s.leg_status,
                    child_status: None,
                    updated_at: Utc::now(),
                })
                .collect(),
            updated_at: Utc::now(),
        };

        self.write(&snapshot).await;
    }

    /// Publicar la actualización de estado de un niño: se relee el snapshot,
    /// se aplica la marca y se reescribe completo bajo la misma clave.
    /// Best effort: sin snapshot publicado no hay nada que actualizar.
    pub async fn publish_child_update(
        &self,
        session_id: Uuid,
        student: &SessionStudent,
        child_status: ChildStatus,
    ) {
        let Some(mut snapshot) = self.read_session(session_id).await else {
            warn!(
                "⚠️ Sesión {} sin snapshot publicado, marca de asistencia no espejada",
                session_id
            );
            return;
        };

        apply_child_update(&mut snapshot, student, child_status);
        self.write(&snapshot).await;
    }

    /// Leer el snapshot publicado de una sesión, si existe.
    /// Un miss no distingue entre "nunca publicado" y "expirado".
    pub async fn read_session(&self, session_id: Uuid) -> Option<SessionSnapshot> {
        let key = self.redis.session_key(&session_id.to_string());
        match self.redis.get::<SessionSnapshot>(&key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("⚠️ No se pudo leer el espejo de la sesión {}: {}", session_id, e);
                None
            }
        }
    }

    /// Retirar el snapshot de una sesión que dejó de estar en curso
    pub async fn clear_session(&self, session_id: Uuid) {
        let key = self.redis.session_key(&session_id.to_string());
        if let Err(e) = self.redis.delete(&key).await {
            warn!(
                "⚠️ No se pudo retirar el espejo de la sesión {}: {}",
                session_id, e
            );
        }
    }

    async fn write(&self, snapshot: &SessionSnapshot) {
        let key = self.redis.session_key(&snapshot.session_id.to_string());
        if let Err(e) = self.redis.set(&key, snapshot, self.redis.default_ttl()).await {
            warn!(
                "⚠️ No se pudo espejar la sesión {}: {}",
                snapshot.session_id, e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_children(child_ids: &[Uuid]) -> SessionSnapshot {
        SessionSnapshot {
            session_id: Uuid::new_v4(),
            van_id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
            service_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            route_type: RouteType::MorningPickup,
            session_status: SessionStatus::Active,
            children: child_ids
                .iter()
                .enumerate()
                .map(|(i, id)| ChildSnapshot {
                    child_id: *id,
                    pickup_order: i as i32,
                    leg_status: LegStatus::Pending,
                    child_status: None,
                    updated_at: Utc::now(),
                })
                .collect(),
            updated_at: Utc::now(),
        }
    }

    fn student(child_id: Uuid, leg_status: LegStatus) -> SessionStudent {
        SessionStudent {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            child_id,
            pickup_order: 0,
            leg_status,
            marked_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_attendance_mark_updates_published_roster() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut snapshot = snapshot_with_children(&[first, second]);

        apply_child_update(
            &mut snapshot,
            &student(first, LegStatus::PickedUp),
            ChildStatus::OnVan,
        );

        let marked = &snapshot.children[0];
        assert_eq!(marked.leg_status, LegStatus::PickedUp);
        assert_eq!(marked.child_status, Some(ChildStatus::OnVan));

        // El resto del roster no se toca
        let untouched = &snapshot.children[1];
        assert_eq!(untouched.leg_status, LegStatus::Pending);
        assert_eq!(untouched.child_status, None);
    }

    #[test]
    fn test_unknown_child_leaves_snapshot_untouched() {
        let known = Uuid::new_v4();
        let mut snapshot = snapshot_with_children(&[known]);
        let before = snapshot.updated_at;

        apply_child_update(
            &mut snapshot,
            &student(Uuid::new_v4(), LegStatus::PickedUp),
            ChildStatus::OnVan,
        );

        assert_eq!(snapshot.children[0].leg_status, LegStatus::Pending);
        assert_eq!(snapshot.updated_at, before);
    }

    #[test]
    fn test_dropoff_mark_reflects_final_status() {
        let child = Uuid::new_v4();
        let mut snapshot = snapshot_with_children(&[child]);

        apply_child_update(
            &mut snapshot,
            &student(child, LegStatus::DroppedOff),
            ChildStatus::AtSchool,
        );

        assert_eq!(snapshot.children[0].leg_status, LegStatus::DroppedOff);
        assert_eq!(snapshot.children[0].child_status, Some(ChildStatus::AtSchool));
    }
}
