mod cache;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use cache::redis_client::RedisClient;
use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚌 School Transport Coordinator - API");
    info!("=====================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Inicializar Redis (espejo realtime de sesiones)
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let redis_config = cache::CacheConfig {
        redis_url,
        ..cache::CacheConfig::default()
    };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;

    // En producción sólo se admiten los orígenes configurados
    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config, redis_client)?;

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/matching", routes::matching_routes::create_matching_router())
        .nest("/api/session", routes::session_routes::create_session_router())
        .nest("/api/child", routes::child_routes::create_child_router())
        .nest("/api/van", routes::van_routes::create_van_router())
        .nest("/api/van-request", routes::van_request_routes::create_van_request_router())
        .nest("/api/payroll", routes::payroll_routes::create_payroll_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🧭 Matching:");
    info!("   GET  /api/matching/child/:id/vans - Vans que sirven el viaje del niño");
    info!("🚌 Sesiones:");
    info!("   POST /api/session/start - Iniciar sesión del turno");
    info!("   GET  /api/session/:id - Sesión con roster");
    info!("   GET  /api/session/:id/live - Snapshot realtime del espejo");
    info!("   POST /api/session/:id/attendance - Marcar asistencia");
    info!("   POST /api/session/:id/complete - Completar sesión");
    info!("   POST /api/session/:id/cancel - Cancelar sesión");
    info!("👧 Niños:");
    info!("   POST /api/child - Matricular niño");
    info!("   GET  /api/child/:id - Obtener niño");
    info!("   PUT  /api/child/:id - Actualizar niño");
    info!("   DELETE /api/child/:id - Baja lógica");
    info!("   POST /api/child/:id/absence - Registrar ausencia");
    info!("   GET  /api/child/parent/:id - Niños de un padre");
    info!("🚐 Vans:");
    info!("   POST /api/van - Registrar van");
    info!("   GET  /api/van/:id - Obtener van");
    info!("   PUT  /api/van/:id/review - Aprobar/rechazar (admin)");
    info!("   PUT  /api/van/:id/driver - Asignar conductor");
    info!("   PUT  /api/van/:id/path - Fijar ruta");
    info!("   GET  /api/van/owner/:id - Vans de un dueño");
    info!("📨 Solicitudes:");
    info!("   POST /api/van-request - Crear solicitud");
    info!("   GET  /api/van-request/van/:id - Solicitudes de una van");
    info!("   POST /api/van-request/:id/approve - Aprobar");
    info!("   POST /api/van-request/:id/reject - Rechazar");
    info!("💰 Nómina:");
    info!("   POST /api/payroll/payment - Registrar pago");
    info!("   GET  /api/payroll/driver/:id - Nómina del conductor");
    info!("   POST /api/payroll/driver/:id/settle - Liquidar conductor");
    info!("   GET  /api/payroll/owner/:id - Nómina del dueño");
    info!("   POST /api/payroll/owner/:id/settle - Liquidar dueño");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    Json(json!({
        "message": "School Transport API funcionando correctamente",
        "status": "ok",
        "redis": if state.redis.is_connected().await { "up" } else { "down" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
