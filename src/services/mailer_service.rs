//! Relay HTTP de correo
//!
//! Envía el resumen de nómina tras una liquidación. El envío es best effort:
//! un fallo se loguea y se descarta, nunca afecta el resultado de la
//! liquidación. Sin MAIL_API_URL configurada el envío se omite.

use serde_json::json;

use crate::dto::payroll_dto::PayrollResponse;

pub struct MailerService {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
}

impl MailerService {
    pub fn new(
        client: reqwest::Client,
        api_url: Option<String>,
        api_key: Option<String>,
        from: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            from,
        }
    }

    /// Enviar el resumen de nómina de un mes. Nunca devuelve error.
    pub async fn send_payroll_summary(&self, to: &str, payroll: &PayrollResponse) {
        let Some(api_url) = &self.api_url else {
            log::debug!("📭 Relay de correo no configurado, se omite el envío a {}", to);
            return;
        };

        let body = json!({
            "from": self.from,
            "to": to,
            "subject": format!("Payroll summary {}", payroll.month_start.format("%Y-%m")),
            "payroll": payroll,
        });

        let mut request = self.client.post(api_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                log::info!("📧 Resumen de nómina enviado a {}", to);
            }
            Ok(response) => {
                log::warn!(
                    "⚠️ Relay de correo respondió {} para {}, se descarta",
                    response.status(),
                    to
                );
            }
            Err(e) => {
                log::warn!("⚠️ Fallo enviando resumen de nómina a {}: {}", to, e);
            }
        }
    }
}
