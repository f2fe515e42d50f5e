//! Controllers
//!
//! Orquestación de negocio sobre repositorios y servicios. Cada controller
//! devuelve Result<_, AppError>; los handlers de routes sólo extraen y
//! delegan.

pub mod child_controller;
pub mod matching_controller;
pub mod payroll_controller;
pub mod session_controller;
pub mod van_controller;
pub mod van_request_controller;
