//! Lookup flow orchestration
//!
//! Wires the gate, validator, client and presenter together:
//! trigger → gate → validate → request → present → release.
//! Every UI effect goes through the injected [`UiSink`], so the flow is
//! testable without a browser or toolkit.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::client::{CsrfTokenProvider, LookupClient};
use crate::config::ProveedorConfig;
use crate::errors::ValidationError;
use crate::form::FormSubmitGuard;
use crate::gate::RequestGate;
use crate::presenter::ResponsePresenter;
use crate::stats::{LookupStats, StatsSnapshot};
use crate::types::{
    Field, NitInputFeedback, NotifyKind, PresentationCommand, RegistrationFields, SubmitDecision,
    TriggerResult,
};
use crate::validator::{filter_digits, is_length_valid_with, validate_nit_with};

/// Receives presentation commands; implemented per UI toolkit
pub trait UiSink: Send + Sync {
    fn apply(&self, command: PresentationCommand);
}

/// Orchestrates the supplier lookup and registration guard
pub struct LookupFlow {
    config: Arc<ProveedorConfig>,
    gate: RequestGate,
    client: LookupClient,
    presenter: ResponsePresenter,
    form_guard: FormSubmitGuard,
    sink: Arc<dyn UiSink>,
    stats: Arc<LookupStats>,
}

impl LookupFlow {
    pub fn new(
        config: ProveedorConfig,
        token: Arc<dyn CsrfTokenProvider>,
        sink: Arc<dyn UiSink>,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            gate: RequestGate::new(),
            client: LookupClient::new(config.clone(), token),
            presenter: ResponsePresenter::new(config.clone()),
            form_guard: FormSubmitGuard::new(config.validation),
            stats: Arc::new(LookupStats::new()),
            sink,
            config,
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Handle one lookup trigger (click or Enter key). The gate is
    /// released on every path by the scoped guard.
    pub async fn trigger_lookup(&self, raw_input: &str) -> TriggerResult {
        let Some(_gate) = self.gate.guard() else {
            debug!("⏳ Búsqueda ya en progreso, disparo ignorado");
            self.stats.record_gate_rejection();
            return TriggerResult::Busy;
        };

        let messages = &self.config.messages;
        let nit = match validate_nit_with(raw_input.trim(), &self.config.validation) {
            Ok(nit) => nit,
            Err(error) => {
                self.stats.record_validation_rejection();
                let (kind, title, message) = match error {
                    ValidationError::EmptyInput => (
                        NotifyKind::Warning,
                        messages.titulo_campo_requerido.clone(),
                        messages.nit_requerido.clone(),
                    ),
                    ValidationError::FormatError => (
                        NotifyKind::Error,
                        messages.titulo_nit_invalido.clone(),
                        messages.nit_invalido.clone(),
                    ),
                };
                self.sink.apply(PresentationCommand::Modal {
                    kind,
                    title,
                    message,
                });
                self.sink.apply(PresentationCommand::Focus { field: Field::Nit });
                return TriggerResult::Rejected(error);
            }
        };

        self.sink.apply(PresentationCommand::SetBusy { busy: true });
        self.sink.apply(PresentationCommand::RenderLoading {
            message: messages.consultando.clone(),
        });

        let started = Instant::now();
        let outcome = self.client.lookup(&nit).await;
        self.stats.record_outcome(&outcome, started.elapsed());

        for command in self.presenter.present(&outcome) {
            self.sink.apply(command);
        }
        self.sink.apply(PresentationCommand::SetBusy { busy: false });

        TriggerResult::Completed(outcome)
    }

    /// Gate a registration form submission. Blocked submissions show a
    /// modal and move focus; authorized ones flip the submit control to
    /// its busy state and notify, then the caller proceeds with the
    /// normal form POST.
    pub fn handle_submit(&self, fields: &RegistrationFields) -> SubmitDecision {
        let messages = &self.config.messages;
        match self.form_guard.can_submit(fields) {
            Ok(()) => {
                self.sink.apply(PresentationCommand::SetBusy { busy: true });
                self.sink.apply(PresentationCommand::Notify {
                    kind: NotifyKind::Info,
                    title: messages.titulo_procesando.clone(),
                    message: messages.registrando.clone(),
                    auto_hide: true,
                });
                SubmitDecision::Authorized
            }
            Err(errors) => {
                let first = errors[0];
                let message = match (first.field, first.error) {
                    (Field::Nombre, _) => messages.nombre_requerido.clone(),
                    (Field::Nit, ValidationError::EmptyInput) => {
                        messages.nit_form_requerido.clone()
                    }
                    (Field::Nit, ValidationError::FormatError) => messages.nit_invalido.clone(),
                };
                let title = match first.error {
                    ValidationError::FormatError => messages.titulo_nit_invalido.clone(),
                    ValidationError::EmptyInput => messages.titulo_campo_requerido.clone(),
                };
                self.sink.apply(PresentationCommand::Modal {
                    kind: NotifyKind::Error,
                    title,
                    message,
                });
                self.sink
                    .apply(PresentationCommand::Focus { field: first.field });
                SubmitDecision::Blocked(first)
            }
        }
    }

    /// Live-input filtering for the NIT field: strip non-digits and flag
    /// out-of-bounds lengths for the validity marker.
    pub fn filter_nit_input(&self, raw: &str) -> NitInputFeedback {
        let filtered = filter_digits(raw);
        let length_ok = is_length_valid_with(&filtered, &self.config.validation);
        NitInputFeedback {
            filtered,
            length_ok,
        }
    }
}
