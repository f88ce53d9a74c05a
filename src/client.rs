//! Lookup client for the consultar-nit endpoint
//!
//! One form-encoded POST per trigger, no retries, transport-default
//! timeout. The response is classified into a [`LookupOutcome`]; this
//! module never touches UI state.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::ProveedorConfig;
use crate::types::{LookupOutcome, NitValue, Source};

/// Provides the CSRF token attached to outbound requests. In the browser
/// host this is read once at page init from the hidden form field or the
/// meta tag; other hosts inject their own source.
pub trait CsrfTokenProvider: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// Fixed token captured at initialization
pub struct StaticToken(pub String);

impl CsrfTokenProvider for StaticToken {
    fn csrf_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No token available (e.g. CLI usage against a CSRF-exempt endpoint)
pub struct NoToken;

impl CsrfTokenProvider for NoToken {
    fn csrf_token(&self) -> Option<String> {
        None
    }
}

/// Wire shape of the consultar-nit JSON response
#[derive(Debug, Deserialize)]
struct ConsultResponse {
    success: bool,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Optional structured message in non-2xx bodies
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the supplier lookup endpoint
pub struct LookupClient {
    client: reqwest::Client,
    config: Arc<ProveedorConfig>,
    token: Arc<dyn CsrfTokenProvider>,
}

impl LookupClient {
    pub fn new(config: Arc<ProveedorConfig>, token: Arc<dyn CsrfTokenProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            token,
        }
    }

    /// Send the validated NIT and classify the response. Transport
    /// failures are an outcome, not an error: the caller always gets
    /// exactly one variant back.
    pub async fn lookup(&self, nit: &NitValue) -> LookupOutcome {
        let url = self.config.endpoints.consultar_nit_url();
        info!("🔍 Consultando NIT {} en {}", nit, url);

        let token = self.token.csrf_token().unwrap_or_default();
        let form = [("nit", nit.as_str()), ("csrfmiddlewaretoken", token.as_str())];

        let mut request = self.client.post(&url).form(&form);
        if !token.is_empty() {
            request = request.header("X-CSRFToken", &token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("❌ Fallo de transporte: {}", e);
                return LookupOutcome::TransportError {
                    message: self.config.messages.error_conexion.clone(),
                    status: None,
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            // Prefer a structured message from the error body when present
            let body_message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            let message = body_message.unwrap_or_else(|| self.status_message(code));
            warn!("❌ Consulta rechazada: HTTP {}", code);
            return LookupOutcome::TransportError {
                message,
                status: Some(code),
            };
        }

        let parsed: ConsultResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("❌ Respuesta ilegible del backend: {}", e);
                return LookupOutcome::TransportError {
                    message: self.config.messages.error_conexion.clone(),
                    status: None,
                };
            }
        };

        if parsed.success {
            let source = match parsed.source.as_deref() {
                Some("local") => Source::Local,
                _ => Source::Remote,
            };
            info!("✅ Proveedor encontrado (fuente: {})", source.as_str());
            LookupOutcome::Found {
                source,
                html: parsed.html.unwrap_or_default(),
                warning: parsed.warning,
            }
        } else {
            let message = parsed
                .message
                .unwrap_or_else(|| self.config.messages.no_encontrado.clone());
            info!("ℹ️ Sin resultados: {}", message);
            LookupOutcome::NotFound { message }
        }
    }

    fn status_message(&self, code: u16) -> String {
        let messages = &self.config.messages;
        match code {
            500 => messages.error_servidor.clone(),
            403 => messages.error_permisos.clone(),
            _ => messages.error_conexion.clone(),
        }
    }
}
