//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use super::schedule::ShiftSchedule;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,

    /// Tolerancia de dirección para el matching (km).
    /// Primera parada vs pickup, última parada vs portón del colegio.
    pub direction_tolerance_km: f64,

    /// Radio de proximidad para el matching (km).
    pub match_radius_km: f64,

    /// Ventanas horarias de los turnos (mañana / tarde)
    pub shift_schedule: ShiftSchedule,

    /// API externa de distancias para el estimado de tarifa.
    /// Si no está configurada se usa distancia Haversine.
    pub distance_api_url: Option<String>,
    pub distance_api_token: Option<String>,

    /// Relay HTTP de correo para los resúmenes de nómina
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_from: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
            direction_tolerance_km: env_f64("DIRECTION_TOLERANCE_KM", 10.0),
            match_radius_km: env_f64("MATCH_RADIUS_KM", 40.0),
            shift_schedule: ShiftSchedule::from_env(),
            distance_api_url: env::var("DISTANCE_API_URL").ok(),
            distance_api_token: env::var("DISTANCE_API_TOKEN").ok(),
            mail_api_url: env::var("MAIL_API_URL").ok(),
            mail_api_key: env::var("MAIL_API_KEY").ok(),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "payroll@schooltransport.lk".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{} must be a valid number", key)),
        Err(_) => default,
    }
}
