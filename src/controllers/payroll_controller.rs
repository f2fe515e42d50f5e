use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::payroll_dto::{
    PayrollLineResponse, PayrollResponse, RecordPaymentRequest, SettleRequest, SettlementResponse,
};
use crate::repositories::child_repository::ChildRepository;
use crate::repositories::payroll_repository::{PayrollRepository, Recipient};
use crate::repositories::van_repository::VanRepository;
use crate::services::mailer_service::MailerService;
use crate::services::payroll_service::{parse_month, split_payment};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct PayrollController {
    payroll: PayrollRepository,
    children: ChildRepository,
    vans: VanRepository,
    mailer: MailerService,
}

impl PayrollController {
    pub fn new(state: &AppState) -> Self {
        Self {
            payroll: PayrollRepository::new(state.pool.clone()),
            children: ChildRepository::new(state.pool.clone()),
            vans: VanRepository::new(state.pool.clone()),
            mailer: MailerService::new(
                state.http_client.clone(),
                state.config.mail_api_url.clone(),
                state.config.mail_api_key.clone(),
                state.config.mail_from.clone(),
            ),
        }
    }

    /// Registrar el pago de un mes de un niño, dividido por el porcentaje
    /// almacenado en la van.
    pub async fn record_payment(
        &self,
        request: RecordPaymentRequest,
    ) -> Result<ApiResponse<serde_json::Value>, AppError> {
        let month_start = parse_month(&request.month)?;

        let child = self
            .children
            .find_by_id(request.child_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Niño no encontrado".to_string()))?;

        let van_id = child.van_id.ok_or_else(|| {
            AppError::BadRequest("El niño no tiene van asignada".to_string())
        })?;

        let van = self
            .vans
            .find_by_id(van_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van no encontrada".to_string()))?;

        let driver_id = van.driver_id.ok_or_else(|| {
            AppError::BadRequest("La van no tiene conductor para recibir su parte".to_string())
        })?;

        let split = split_payment(request.amount, request.system_fee, van.salary_percentage)?;

        let payment = self
            .payroll
            .insert_payment(
                child.id,
                van.id,
                driver_id,
                van.owner_id,
                month_start,
                request.amount,
                request.system_fee,
                split.driver_share,
                split.owner_share,
            )
            .await?;

        log::info!(
            "💰 Pago {} registrado para niño {} mes {}",
            payment.id,
            child.id,
            month_start
        );

        Ok(ApiResponse::success_with_message(
            serde_json::json!({ "payment_id": payment.id }),
            "Pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn payroll_for(
        &self,
        recipient: Recipient,
        recipient_id: Uuid,
        month: &str,
    ) -> Result<PayrollResponse, AppError> {
        let month_start = parse_month(month)?;
        let lines = self
            .payroll
            .aggregate_month(recipient, recipient_id, month_start)
            .await?;

        let recipient_total: Decimal = lines
            .iter()
            .map(|l| match recipient {
                Recipient::Driver => l.total_driver_share,
                Recipient::Owner => l.total_owner_share,
            })
            .sum();

        Ok(PayrollResponse {
            recipient_id,
            month_start,
            lines: lines
                .into_iter()
                .map(|l| PayrollLineResponse {
                    child_id: l.child_id,
                    total_amount: l.total_amount,
                    total_system_fee: l.total_system_fee,
                    total_driver_share: l.total_driver_share,
                    total_owner_share: l.total_owner_share,
                })
                .collect(),
            recipient_total,
        })
    }

    /// Liquidar el mes del receptor y (best effort) enviar el resumen.
    /// El fallo del correo nunca afecta la liquidación.
    pub async fn settle(
        &self,
        recipient: Recipient,
        recipient_id: Uuid,
        request: SettleRequest,
    ) -> Result<ApiResponse<SettlementResponse>, AppError> {
        let month_start = parse_month(&request.month)?;

        let breakdown = self
            .payroll_for(recipient, recipient_id, &request.month)
            .await?;

        let settled = self
            .payroll
            .settle_month(recipient, recipient_id, month_start)
            .await?;

        log::info!(
            "🧾 Nómina liquidada: receptor {} mes {} ({} pagos)",
            recipient_id,
            month_start,
            settled
        );

        if let Some(email) = &request.email {
            self.mailer.send_payroll_summary(email, &breakdown).await;
        }

        Ok(ApiResponse::success_with_message(
            SettlementResponse {
                recipient_id,
                month_start,
                payments_settled: settled,
            },
            "Nómina liquidada exitosamente".to_string(),
        ))
    }
}
