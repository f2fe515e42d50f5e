//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno,
//! ventanas de turnos y parámetros del matching.

pub mod environment;
pub mod schedule;

pub use environment::*;
pub use schedule::{ShiftKind, ShiftSchedule};
