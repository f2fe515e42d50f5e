//! Cliente de la API externa de distancias
//!
//! La tarifa estimada usa la distancia del viaje pickup -> colegio. Cuando
//! hay una API configurada se consulta por HTTP; si no, se cae a la
//! distancia Haversine local. Un fallo de la API configurada se propaga al
//! caller como error (no hay retry).

use serde::Deserialize;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::geo::{haversine_distance, GeoPoint};

#[derive(Debug, Deserialize)]
struct DistanceApiResponse {
    distance_km: f64,
}

pub struct DistanceService {
    client: reqwest::Client,
    api_url: Option<String>,
    api_token: Option<String>,
}

impl DistanceService {
    pub fn new(
        client: reqwest::Client,
        api_url: Option<String>,
        api_token: Option<String>,
    ) -> Self {
        Self {
            client,
            api_url,
            api_token,
        }
    }

    /// Distancia del viaje en km
    pub async fn trip_distance_km(&self, from: GeoPoint, to: GeoPoint) -> AppResult<f64> {
        let Some(api_url) = &self.api_url else {
            log::debug!("📏 Sin API de distancias configurada, usando Haversine");
            return Ok(haversine_distance(from, to));
        };

        log::info!(
            "📏 Consultando distancia externa ({:.4},{:.4}) -> ({:.4},{:.4})",
            from.lat,
            from.lng,
            to.lat,
            to.lng
        );

        let mut request = self.client.get(api_url).query(&[
            ("from_lat", from.lat),
            ("from_lng", from.lng),
            ("to_lat", to.lat),
            ("to_lng", to.lng),
        ]);

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("distance API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "distance API returned status {}",
                status
            )));
        }

        let body: DistanceApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("invalid distance API response: {}", e)))?;

        Ok(body.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_to_haversine_without_api() {
        let service = DistanceService::new(reqwest::Client::new(), None, None);
        let from = GeoPoint::new(6.9, 79.9);
        let to = GeoPoint::new(6.95, 79.95);

        let distance = service.trip_distance_km(from, to).await.unwrap();
        // ~7.8 km en línea recta
        assert!(distance > 5.0 && distance < 10.0);
    }
}
