//! Utilidades geográficas
//!
//! Distancia de círculo máximo (Haversine) entre coordenadas. Todas las
//! distancias se expresan en kilómetros.

/// Radio medio de la Tierra en kilómetros
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Coordenada geográfica (latitud, longitud en grados)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Distancia Haversine entre dos puntos, en kilómetros
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Verifica si un punto está dentro de un radio (km) de un centro
pub fn is_within_radius(point: GeoPoint, center: GeoPoint, max_radius_km: f64) -> bool {
    haversine_distance(point, center) <= max_radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_colombo_kandy() {
        // Colombo Fort
        let colombo = GeoPoint::new(6.9344, 79.8428);
        // Kandy
        let kandy = GeoPoint::new(7.2906, 80.6337);

        let distance = haversine_distance(colombo, kandy);
        // En línea recta son ~95 km
        assert!(distance > 85.0 && distance < 105.0);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let p = GeoPoint::new(6.9, 79.9);
        assert!(haversine_distance(p, p) < 1e-9);
    }

    #[test]
    fn test_within_radius() {
        let center = GeoPoint::new(6.9271, 79.8612); // Colombo
        let nearby = GeoPoint::new(6.93, 79.87);

        assert!(is_within_radius(nearby, center, 10.0));

        let kandy = GeoPoint::new(7.2906, 80.6337);
        assert!(!is_within_radius(kandy, center, 10.0));
    }
}
