//! Validaciones comunes
//!
//! Validación de matrículas y coordenadas para los DTOs de entrada.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Matrículas estilo Sri Lanka: "WP NA-1234", "NB-4521", también placas antiguas
    static ref REGISTRATION_RE: Regex =
        Regex::new(r"^[A-Z]{0,3}\s?[A-Z]{2,3}-\d{4}$").unwrap();
}

/// Valida el número de matrícula de una van
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    if REGISTRATION_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_registration_number"))
    }
}

/// Valida una latitud en grados
pub fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_latitude"))
    }
}

/// Valida una longitud en grados
pub fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_longitude"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_numbers() {
        assert!(validate_registration_number("WP NA-1234").is_ok());
        assert!(validate_registration_number("NB-4521").is_ok());
        assert!(validate_registration_number("not a plate").is_err());
        assert!(validate_registration_number("").is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_latitude(6.9271).is_ok());
        assert!(validate_latitude(91.0).is_err());
        assert!(validate_longitude(79.8612).is_ok());
        assert!(validate_longitude(-181.0).is_err());
    }
}
