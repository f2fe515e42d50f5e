//! Repositorios
//!
//! Acceso a datos con sqlx. Un repositorio por agregado; las queries son
//! runtime (`query_as` + `bind`).

pub mod child_repository;
pub mod path_repository;
pub mod payroll_repository;
pub mod school_repository;
pub mod session_repository;
pub mod van_repository;
pub mod van_request_repository;
