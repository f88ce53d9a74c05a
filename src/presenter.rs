//! Outcome presentation
//!
//! Maps a classified [`LookupOutcome`] to presentation commands. Owns no
//! toolkit detail and never touches the request gate.

use std::sync::Arc;

use crate::config::ProveedorConfig;
use crate::types::{LookupOutcome, NotifyKind, PresentationCommand, Source};

pub struct ResponsePresenter {
    config: Arc<ProveedorConfig>,
}

impl ResponsePresenter {
    pub fn new(config: Arc<ProveedorConfig>) -> Self {
        Self { config }
    }

    pub fn present(&self, outcome: &LookupOutcome) -> Vec<PresentationCommand> {
        let messages = &self.config.messages;
        match outcome {
            LookupOutcome::Found {
                source,
                html,
                warning,
            } => {
                let fuente = match source {
                    Source::Local => &messages.fuente_local,
                    Source::Remote => &messages.fuente_remota,
                };
                let mut commands = vec![
                    PresentationCommand::RenderResult { html: html.clone() },
                    PresentationCommand::Notify {
                        kind: NotifyKind::Success,
                        title: messages.titulo_encontrado.clone(),
                        message: format!("{} {}", messages.encontrado_desde, fuente),
                        auto_hide: true,
                    },
                ];
                if let Some(warning) = warning {
                    commands.push(PresentationCommand::Notify {
                        kind: NotifyKind::Warning,
                        title: messages.titulo_advertencia.clone(),
                        message: warning.clone(),
                        auto_hide: true,
                    });
                }
                commands
            }
            LookupOutcome::NotFound { message } => vec![
                PresentationCommand::RenderNotFound {
                    message: message.clone(),
                },
                PresentationCommand::Notify {
                    kind: NotifyKind::Info,
                    title: messages.titulo_sin_resultados.clone(),
                    message: message.clone(),
                    auto_hide: true,
                },
            ],
            LookupOutcome::TransportError { message, .. } => vec![
                PresentationCommand::RenderError {
                    message: message.clone(),
                },
                PresentationCommand::Modal {
                    kind: NotifyKind::Error,
                    title: messages.titulo_error_consulta.clone(),
                    message: message.clone(),
                },
            ],
        }
    }
}
