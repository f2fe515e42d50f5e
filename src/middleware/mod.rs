//! Middleware
//!
//! Capas HTTP transversales del servidor.

pub mod cors;
