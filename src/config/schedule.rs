//! Ventanas horarias de los turnos
//!
//! Clasifica la hora local del conductor en turno de mañana (recogida hacia
//! el colegio) o de tarde (reparto hacia casa). Reemplaza el corte duro de
//! las 10:00 por ventanas configurables via entorno.

use chrono::NaiveTime;

/// Tipo de ruta de un turno
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    MorningPickup,
    EveningDropoff,
}

/// Ventana horaria [start, end] inclusiva
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftWindow {
    fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Horario de turnos del servicio
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSchedule {
    pub morning: ShiftWindow,
    pub evening: ShiftWindow,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self {
            morning: parse_window("05:00-10:00").unwrap(),
            evening: parse_window("12:00-20:00").unwrap(),
        }
    }
}

impl ShiftSchedule {
    /// Construir desde MORNING_SHIFT / EVENING_SHIFT ("HH:MM-HH:MM")
    pub fn from_env() -> Self {
        let default = Self::default();
        let morning = std::env::var("MORNING_SHIFT")
            .ok()
            .and_then(|s| parse_window(&s))
            .unwrap_or(default.morning);
        let evening = std::env::var("EVENING_SHIFT")
            .ok()
            .and_then(|s| parse_window(&s))
            .unwrap_or(default.evening);
        Self { morning, evening }
    }

    /// Clasificar una hora local en un turno. `None` fuera de servicio.
    pub fn classify(&self, time: NaiveTime) -> Option<ShiftKind> {
        if self.morning.contains(time) {
            Some(ShiftKind::MorningPickup)
        } else if self.evening.contains(time) {
            Some(ShiftKind::EveningDropoff)
        } else {
            None
        }
    }
}

fn parse_window(value: &str) -> Option<ShiftWindow> {
    let (start, end) = value.split_once('-')?;
    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
    if start >= end {
        return None;
    }
    Some(ShiftWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_classify_morning() {
        let schedule = ShiftSchedule::default();
        assert_eq!(schedule.classify(time(6, 30)), Some(ShiftKind::MorningPickup));
        assert_eq!(schedule.classify(time(10, 0)), Some(ShiftKind::MorningPickup));
    }

    #[test]
    fn test_classify_evening() {
        let schedule = ShiftSchedule::default();
        assert_eq!(schedule.classify(time(13, 15)), Some(ShiftKind::EveningDropoff));
        assert_eq!(schedule.classify(time(20, 0)), Some(ShiftKind::EveningDropoff));
    }

    #[test]
    fn test_classify_outside_service_hours() {
        let schedule = ShiftSchedule::default();
        assert_eq!(schedule.classify(time(11, 0)), None);
        assert_eq!(schedule.classify(time(23, 30)), None);
        assert_eq!(schedule.classify(time(3, 0)), None);
    }

    #[test]
    fn test_parse_window_rejects_inverted_range() {
        assert!(parse_window("15:00-09:00").is_none());
        assert!(parse_window("garbage").is_none());
    }
}
