//! Proveedor Lookup CLI
//!
//! One-shot NIT consultation against a configured backend. Useful for
//! smoke-testing the endpoint without a browser:
//!
//! ```text
//! PROVEEDOR_BASE_URL=https://app.example.com proveedor_lookup 901234567
//! ```

use std::sync::Arc;

use eyre::{eyre, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use proveedor_lookup::{
    LookupFlow, NoToken, NotifyKind, PresentationCommand, ProveedorConfig, TriggerResult, UiSink,
};

/// Prints presentation commands to the terminal
struct ConsoleSink;

impl UiSink for ConsoleSink {
    fn apply(&self, command: PresentationCommand) {
        match command {
            PresentationCommand::RenderResult { html } => {
                println!("── Resultado ──\n{}", html);
            }
            PresentationCommand::RenderNotFound { message } => {
                println!("── No encontrado ──\n{}", message);
            }
            PresentationCommand::RenderError { message } => {
                println!("── Error ──\n{}", message);
            }
            PresentationCommand::RenderLoading { message } => {
                println!("{}", message);
            }
            PresentationCommand::Notify {
                kind,
                title,
                message,
                ..
            } => {
                println!("{} {}: {}", icon(kind), title, message);
            }
            PresentationCommand::Modal {
                kind,
                title,
                message,
            } => {
                println!("{} [{}] {}", icon(kind), title, message);
            }
            PresentationCommand::Focus { field } => {
                println!("(foco en el campo {})", field.as_str());
            }
            PresentationCommand::SetBusy { .. } => {}
        }
    }
}

fn icon(kind: NotifyKind) -> &'static str {
    match kind {
        NotifyKind::Success => "✅",
        NotifyKind::Error => "❌",
        NotifyKind::Warning => "⚠️",
        NotifyKind::Info => "ℹ️",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let nit = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("uso: proveedor_lookup <NIT>"))?;

    let config = ProveedorConfig::default();
    println!(
        "🔍 Consultando NIT contra {}\n",
        config.endpoints.consultar_nit_url()
    );

    let flow = LookupFlow::new(config, Arc::new(NoToken), Arc::new(ConsoleSink));

    match flow.trigger_lookup(&nit).await {
        TriggerResult::Completed(_) => {}
        TriggerResult::Rejected(error) => {
            return Err(eyre!("entrada rechazada: {}", error));
        }
        TriggerResult::Busy => unreachable!("una sola consulta en este proceso"),
    }

    println!(
        "\n📊 Estadísticas: {}",
        serde_json::to_string_pretty(&flow.stats())?
    );
    Ok(())
}
