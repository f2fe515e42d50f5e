//! Aritmética de nómina
//!
//! División de un pago en fee del sistema, parte del conductor y parte del
//! dueño. Invariante: driver_share + owner_share + system_fee == amount,
//! exacto en Decimal.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Partes calculadas de un pago
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSplit {
    pub driver_share: Decimal,
    pub owner_share: Decimal,
}

/// driver_share = (amount - system_fee) * pct / 100, a 2 decimales;
/// owner_share absorbe el resto para que la suma cierre exacta.
pub fn split_payment(
    amount: Decimal,
    system_fee: Decimal,
    salary_percentage: Decimal,
) -> Result<PaymentSplit, AppError> {
    if amount < Decimal::ZERO || system_fee < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "El monto y el fee del sistema no pueden ser negativos".to_string(),
        ));
    }
    if system_fee > amount {
        return Err(AppError::BadRequest(
            "El fee del sistema no puede superar el monto del pago".to_string(),
        ));
    }
    if salary_percentage < Decimal::ZERO || salary_percentage > Decimal::ONE_HUNDRED {
        return Err(AppError::BadRequest(
            "El porcentaje de salario debe estar entre 0 y 100".to_string(),
        ));
    }

    let driver_share =
        ((amount - system_fee) * salary_percentage / Decimal::ONE_HUNDRED).round_dp(2);
    let owner_share = amount - driver_share - system_fee;

    Ok(PaymentSplit {
        driver_share,
        owner_share,
    })
}

/// Parsear "YYYY-MM" al primer día del mes
pub fn parse_month(month: &str) -> Result<NaiveDate, AppError> {
    let parsed = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d");
    parsed.map_err(|_| AppError::BadRequest("El mes debe usar el formato YYYY-MM".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_split_sums_back_to_amount() {
        let cases = [
            ("5000.00", "500.00", "60"),
            ("3500.50", "350.05", "45.5"),
            ("1.00", "0.33", "33.33"),
            ("0.00", "0.00", "50"),
        ];

        for (amount, fee, pct) in cases {
            let split = split_payment(dec(amount), dec(fee), dec(pct)).unwrap();
            assert_eq!(
                split.driver_share + split.owner_share + dec(fee),
                dec(amount),
                "la suma debe cerrar para amount={}",
                amount
            );
        }
    }

    #[test]
    fn test_split_percentages() {
        let split = split_payment(dec("5000.00"), dec("500.00"), dec("60")).unwrap();
        assert_eq!(split.driver_share, dec("2700.00"));
        assert_eq!(split.owner_share, dec("1800.00"));
    }

    #[test]
    fn test_split_rejects_fee_above_amount() {
        assert!(split_payment(dec("100"), dec("200"), dec("50")).is_err());
    }

    #[test]
    fn test_split_rejects_percentage_out_of_range() {
        assert!(split_payment(dec("100"), dec("10"), dec("150")).is_err());
        assert!(split_payment(dec("100"), dec("10"), dec("-1")).is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2026-08").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
        );
        assert!(parse_month("2026/08").is_err());
        assert!(parse_month("agosto").is_err());
    }
}
