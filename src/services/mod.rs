//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan el filtro de matching, las reglas de sesión,
//! la aritmética de nómina y las integraciones externas.

pub mod distance_service;
pub mod mailer_service;
pub mod matching_service;
pub mod payroll_service;
pub mod session_service;
