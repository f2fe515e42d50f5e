//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;

use crate::cache::redis_client::RedisClient;
use crate::cache::session_mirror::SessionMirror;
use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub redis: RedisClient,
    pub mirror: SessionMirror,
    pub http_client: Client,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        redis: RedisClient,
    ) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            pool,
            config,
            mirror: SessionMirror::new(redis.clone()),
            redis,
            http_client,
        })
    }
}
