//! DTOs de la API
//!
//! Requests y responses de los endpoints. Los modelos nunca se serializan
//! directamente hacia el cliente.

pub mod child_dto;
pub mod common;
pub mod matching_dto;
pub mod payroll_dto;
pub mod session_dto;
pub mod van_dto;
pub mod van_request_dto;
