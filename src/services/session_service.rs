//! Reglas de la sesión de transporte
//!
//! Derivación del estado general del niño a partir de la marca de
//! asistencia y del tipo de ruta del turno, y resolución de la van
//! con la que el conductor abre la sesión.

use uuid::Uuid;

use crate::models::child::ChildStatus;
use crate::models::session::{LegStatus, RouteType};
use crate::models::van::Van;
use crate::utils::errors::AppError;

/// Estado general derivado de una marca de asistencia.
/// `None` cuando la marca no cambia el estado general (not_present / pending).
pub fn derive_child_status(leg_status: LegStatus, route_type: RouteType) -> Option<ChildStatus> {
    match (leg_status, route_type) {
        (LegStatus::PickedUp, _) => Some(ChildStatus::OnVan),
        (LegStatus::DroppedOff, RouteType::MorningPickup) => Some(ChildStatus::AtSchool),
        (LegStatus::DroppedOff, RouteType::EveningDropoff) => Some(ChildStatus::AtHome),
        (LegStatus::NotPresent, _) | (LegStatus::Pending, _) => None,
    }
}

/// Resuelve la van de la lista de vans aprobadas del conductor.
///
/// Si el conductor indica `van_id` tiene que ser una de sus vans;
/// sin `van_id` sólo se acepta cuando la asignación es única.
pub fn select_van(mut assigned: Vec<Van>, requested: Option<Uuid>) -> Result<Van, AppError> {
    if assigned.is_empty() {
        return Err(AppError::NotFound(
            "El conductor no tiene van asignada".to_string(),
        ));
    }

    match requested {
        Some(van_id) => assigned
            .into_iter()
            .find(|van| van.id == van_id)
            .ok_or_else(|| {
                AppError::Forbidden("La van no está asignada a este conductor".to_string())
            }),
        None if assigned.len() == 1 => Ok(assigned.remove(0)),
        None => Err(AppError::Conflict(
            "El conductor tiene varias vans asignadas, se requiere van_id".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::van::VanStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn van(id: Uuid, driver_id: Uuid) -> Van {
        Van {
            id,
            owner_id: Uuid::new_v4(),
            registration_number: "ABC-123".to_string(),
            seating_capacity: 12,
            van_status: VanStatus::Approved,
            driver_id: Some(driver_id),
            path_id: None,
            per_km_rate: Decimal::new(150, 2),
            salary_percentage: Decimal::new(60, 0),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_driver_without_van_is_not_found() {
        let result = select_van(Vec::new(), None);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_single_assignment_needs_no_van_id() {
        let driver_id = Uuid::new_v4();
        let van_id = Uuid::new_v4();
        let resolved = select_van(vec![van(van_id, driver_id)], None).unwrap();
        assert_eq!(resolved.id, van_id);
    }

    #[test]
    fn test_requested_van_must_belong_to_driver() {
        let driver_id = Uuid::new_v4();
        let result = select_van(
            vec![van(Uuid::new_v4(), driver_id)],
            Some(Uuid::new_v4()),
        );
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_requested_van_is_picked_among_several() {
        let driver_id = Uuid::new_v4();
        let wanted = Uuid::new_v4();
        let assigned = vec![van(Uuid::new_v4(), driver_id), van(wanted, driver_id)];
        let resolved = select_van(assigned, Some(wanted)).unwrap();
        assert_eq!(resolved.id, wanted);
    }

    #[test]
    fn test_several_assignments_without_van_id_is_conflict() {
        let driver_id = Uuid::new_v4();
        let assigned = vec![van(Uuid::new_v4(), driver_id), van(Uuid::new_v4(), driver_id)];
        let result = select_van(assigned, None);
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_picked_up_means_on_van() {
        assert_eq!(
            derive_child_status(LegStatus::PickedUp, RouteType::MorningPickup),
            Some(ChildStatus::OnVan)
        );
        assert_eq!(
            derive_child_status(LegStatus::PickedUp, RouteType::EveningDropoff),
            Some(ChildStatus::OnVan)
        );
    }

    #[test]
    fn test_dropped_off_morning_means_at_school() {
        assert_eq!(
            derive_child_status(LegStatus::DroppedOff, RouteType::MorningPickup),
            Some(ChildStatus::AtSchool)
        );
    }

    #[test]
    fn test_dropped_off_evening_means_at_home() {
        assert_eq!(
            derive_child_status(LegStatus::DroppedOff, RouteType::EveningDropoff),
            Some(ChildStatus::AtHome)
        );
    }

    #[test]
    fn test_not_present_leaves_status_unchanged() {
        assert_eq!(
            derive_child_status(LegStatus::NotPresent, RouteType::MorningPickup),
            None
        );
        assert_eq!(
            derive_child_status(LegStatus::NotPresent, RouteType::EveningDropoff),
            None
        );
    }
}
