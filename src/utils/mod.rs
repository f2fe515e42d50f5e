//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, geometría
//! y validación.

pub mod errors;
pub mod geo;
pub mod validation;
