//! Comdinheiro report provider implementation.
//!
//! Fetches the "Relatório Gerencial de Carteiras" report through the
//! vendor's generic import endpoint. The endpoint is a POST of form-encoded
//! credentials plus an inner report-definition URL; the response is the
//! nested `json3` table payload.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::errors::ReportDataError;
use crate::models::{ReportPayload, ReportRequest};
use crate::provider::ReportProvider;

const BASE_URL: &str = "https://www.comdinheiro.com.br/Clientes/API/EndPoint001.php";
const PROVIDER_ID: &str = "COMDINHEIRO";
const REPORT_SCRIPT: &str = "RelatorioGerencialCarteiras001.php";

/// API credentials for the report endpoint.
///
/// Always supplied by the caller's configuration; never embedded in code.
#[derive(Clone)]
pub struct ReportCredentials {
    pub username: String,
    pub password: String,
}

/// Comdinheiro management-report provider.
pub struct ComdinheiroProvider {
    client: Client,
    credentials: ReportCredentials,
}

impl ComdinheiroProvider {
    pub fn new(credentials: ReportCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
        }
    }

    /// Builds the inner report-definition URL the endpoint expects.
    ///
    /// The vendor treats the whole thing as one querystring value, so the
    /// portfolio list (ids joined by " + ") must be percent-encoded as a
    /// unit. The analysis date travels as ddmmyyyy.
    fn report_url(request: &ReportRequest) -> String {
        let portfolios = urlencoding::encode(&request.portfolios.join(" + ")).into_owned();
        let variables = request.variables.join("+");
        format!(
            "{}?&data_analise={}&data_ini=&nome_portfolio={}&variaveis={}\
             &filtro=all&ativo=&filtro_IF=todos&relat_alias=&layout=0&layoutB=0\
             &num_casas=&enviar_email=0&portfolio_editavel=&filtro_id=",
            REPORT_SCRIPT,
            request.analysis_date.format("%d%m%Y"),
            portfolios,
            variables,
        )
    }
}

#[async_trait]
impl ReportProvider for ComdinheiroProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_report(
        &self,
        request: &ReportRequest,
    ) -> Result<ReportPayload, ReportDataError> {
        debug!(
            "Fetching management report for {} portfolios as of {}",
            request.portfolios.len(),
            request.analysis_date
        );

        let report_url = Self::report_url(request);
        let form = [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
            ("URL", report_url.as_str()),
            ("format", "json3"),
        ];

        let response = self
            .client
            .post(BASE_URL)
            .query(&[("code", "import_data")])
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Report endpoint returned {}: {}", status, body);
            return Err(ReportDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}: {}", status, truncate(&body)),
            });
        }

        let text = response.text().await?;

        // The endpoint reports failures in-band with a 200 status.
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ReportDataError::MalformedPayload(e.to_string()))?;
        if let Some(error) = value.get("error").or_else(|| value.get("erro")) {
            return Err(ReportDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: truncate(&error.to_string()),
            });
        }

        serde_json::from_value(value).map_err(|e| ReportDataError::MalformedPayload(e.to_string()))
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_url_encodes_portfolio_list_as_a_unit() {
        let request = ReportRequest::new(
            NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            vec!["FINACAP009".to_string(), "FINACAP010_USD".to_string()],
        );

        let url = ComdinheiroProvider::report_url(&request);
        assert!(url.starts_with("RelatorioGerencialCarteiras001.php?"));
        assert!(url.contains("data_analise=09012025"));
        assert!(url.contains("nome_portfolio=FINACAP009%20%2B%20FINACAP010_USD"));
        assert!(url.contains("variaveis=nome_portfolio+ativo+desc+saldo_bruto+estrategia"));
    }

    #[test]
    fn test_in_band_error_is_detected() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"error": "usuario ou senha invalidos"}"#).unwrap();
        assert!(value.get("error").is_some());
    }
}
