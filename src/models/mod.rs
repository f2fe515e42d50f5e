//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod child;
pub mod path;
pub mod payroll;
pub mod school;
pub mod session;
pub mod van;
pub mod van_request;
