use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payroll::{Payment, PayrollLine};
use crate::utils::errors::AppError;

/// Lado del receptor al consultar o liquidar nómina
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Driver,
    Owner,
}

impl Recipient {
    fn column(&self) -> &'static str {
        match self {
            Recipient::Driver => "driver_id",
            Recipient::Owner => "owner_id",
        }
    }
}

pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_payment(
        &self,
        child_id: Uuid,
        van_id: Uuid,
        driver_id: Uuid,
        owner_id: Uuid,
        month_start: NaiveDate,
        amount: Decimal,
        system_fee: Decimal,
        driver_share: Decimal,
        owner_share: Decimal,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, child_id, van_id, driver_id, owner_id, month_start, amount, system_fee, driver_share, owner_share, payment_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending', $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(child_id)
        .bind(van_id)
        .bind(driver_id)
        .bind(owner_id)
        .bind(month_start)
        .bind(amount)
        .bind(system_fee)
        .bind(driver_share)
        .bind(owner_share)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Sumas por niño para un receptor en un mes
    pub async fn aggregate_month(
        &self,
        recipient: Recipient,
        recipient_id: Uuid,
        month_start: NaiveDate,
    ) -> Result<Vec<PayrollLine>, AppError> {
        // La columna viene de un enum interno, nunca de entrada del cliente
        let query = format!(
            r#"
            SELECT child_id,
                   SUM(amount) AS total_amount,
                   SUM(system_fee) AS total_system_fee,
                   SUM(driver_share) AS total_driver_share,
                   SUM(owner_share) AS total_owner_share
            FROM payments
            WHERE {} = $1 AND month_start = $2
            GROUP BY child_id
            ORDER BY child_id
            "#,
            recipient.column()
        );

        let lines = sqlx::query_as::<_, PayrollLine>(&query)
            .bind(recipient_id)
            .bind(month_start)
            .fetch_all(&self.pool)
            .await?;

        Ok(lines)
    }

    /// Liquidar: todos los pagos pendientes del receptor en el mes pasan a
    /// completed. Devuelve cuántos se liquidaron.
    pub async fn settle_month(
        &self,
        recipient: Recipient,
        recipient_id: Uuid,
        month_start: NaiveDate,
    ) -> Result<u64, AppError> {
        let query = format!(
            r#"
            UPDATE payments
            SET payment_status = 'completed', settled_at = $3
            WHERE {} = $1 AND month_start = $2 AND payment_status = 'pending'
            "#,
            recipient.column()
        );

        let result = sqlx::query(&query)
            .bind(recipient_id)
            .bind(month_start)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
