pub mod child_routes;
pub mod matching_routes;
pub mod payroll_routes;
pub mod session_routes;
pub mod van_request_routes;
pub mod van_routes;
