//! End-to-end tests for the lookup flow against a mock backend

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use proveedor_lookup::{
    Endpoints, Field, LookupFlow, LookupOutcome, NotifyKind, PresentationCommand,
    ProveedorConfig, RegistrationFields, Source, StaticToken, SubmitDecision, TriggerResult,
    UiSink, ValidationError,
};

/// Records every command the flow emits
#[derive(Default)]
struct RecordingSink {
    commands: Mutex<Vec<PresentationCommand>>,
}

impl UiSink for RecordingSink {
    fn apply(&self, command: PresentationCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl RecordingSink {
    fn commands(&self) -> Vec<PresentationCommand> {
        self.commands.lock().unwrap().clone()
    }
}

fn flow_against(server: &MockServer) -> (LookupFlow, Arc<RecordingSink>) {
    let config = ProveedorConfig {
        endpoints: Endpoints {
            base_url: server.uri(),
            ..Default::default()
        },
        ..Default::default()
    };
    let sink = Arc::new(RecordingSink::default());
    let flow = LookupFlow::new(
        config,
        Arc::new(StaticToken("testtoken".to_string())),
        sink.clone(),
    );
    (flow, sink)
}

#[tokio::test]
async fn found_local_renders_result_and_names_the_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "html": "<div>Proveedor 901234567</div>",
            "source": "local"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::Found {
            source: Source::Local,
            ..
        })
    ));
    let commands = sink.commands();
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::RenderResult { html } if html.contains("901234567")
    )));
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Notify { kind: NotifyKind::Success, message, .. }
            if message.contains("base de datos local")
    )));
    // loading state was shown and cleared
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::RenderLoading { .. }
    )));
    assert!(commands
        .iter()
        .any(|c| matches!(c, PresentationCommand::SetBusy { busy: false })));
}

#[tokio::test]
async fn request_carries_csrf_token_in_header_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .and(header("X-CSRFToken", "testtoken"))
        .and(body_string_contains("csrfmiddlewaretoken=testtoken"))
        .and(body_string_contains("nit=901234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "html": "<div>ok</div>",
            "source": "remote"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;
    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::Found {
            source: Source::Remote,
            ..
        })
    ));
    server.verify().await;
}

#[tokio::test]
async fn invalid_nit_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (flow, sink) = flow_against(&server);
    let result = flow.trigger_lookup("123").await;

    assert_eq!(
        result,
        TriggerResult::Rejected(ValidationError::FormatError)
    );
    let commands = sink.commands();
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Modal { kind: NotifyKind::Error, message, .. }
            if message.contains("entre 7 y 15 dígitos")
    )));
    assert!(commands
        .iter()
        .any(|c| matches!(c, PresentationCommand::Focus { field: Field::Nit })));
    // no loading state: validation failed before the request stage
    assert!(!commands
        .iter()
        .any(|c| matches!(c, PresentationCommand::SetBusy { .. })));
    server.verify().await;
}

#[tokio::test]
async fn empty_input_shows_required_field_modal() {
    let server = MockServer::start().await;
    let (flow, sink) = flow_against(&server);

    let result = flow.trigger_lookup("   ").await;

    assert_eq!(result, TriggerResult::Rejected(ValidationError::EmptyInput));
    assert!(sink.commands().iter().any(|c| matches!(
        c,
        PresentationCommand::Modal { kind: NotifyKind::Warning, title, .. }
            if title == "Campo requerido"
    )));
}

#[tokio::test]
async fn not_found_renders_panel_and_info_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "No existe"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::NotFound { ref message }) if message == "No existe"
    ));
    let commands = sink.commands();
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::RenderNotFound { message } if message == "No existe"
    )));
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Notify { kind: NotifyKind::Info, message, .. }
            if message == "No existe"
    )));
}

#[tokio::test]
async fn forbidden_status_maps_to_permission_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    let TriggerResult::Completed(LookupOutcome::TransportError { message, status }) = result
    else {
        panic!("se esperaba un error de transporte");
    };
    assert_eq!(message, "No tiene permisos para realizar esta acción.");
    assert_eq!(status, Some(403));

    let commands = sink.commands();
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::RenderError { message }
            if message == "No tiene permisos para realizar esta acción."
    )));
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Modal { kind: NotifyKind::Error, message, .. }
            if message == "No tiene permisos para realizar esta acción."
    )));
}

#[tokio::test]
async fn server_error_prefers_structured_message_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Falla interna" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::TransportError { ref message, status: Some(500) })
            if message == "Falla interna"
    ));
}

#[tokio::test]
async fn server_error_without_body_falls_back_to_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::TransportError { ref message, .. })
            if message == "Error interno del servidor. Contacte al administrador."
    ));
}

#[tokio::test]
async fn malformed_payload_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>no es json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    let result = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        result,
        TriggerResult::Completed(LookupOutcome::TransportError { status: None, .. })
    ));
}

#[tokio::test]
async fn double_trigger_issues_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(json!({ "success": false, "message": "No existe" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    // Both triggers start before the first response arrives; the gate
    // rejects the second one synchronously.
    let (first, second) = tokio::join!(
        flow.trigger_lookup("901234567"),
        flow.trigger_lookup("901234567")
    );

    let results = [first, second];
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, TriggerResult::Busy))
            .count(),
        1
    );
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, TriggerResult::Completed(_)))
            .count(),
        1
    );
    server.verify().await;
}

#[tokio::test]
async fn gate_releases_after_each_outcome_allowing_retrigger() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    let first = flow.trigger_lookup("901234567").await;
    let second = flow.trigger_lookup("901234567").await;

    assert!(matches!(
        first,
        TriggerResult::Completed(LookupOutcome::TransportError { .. })
    ));
    assert!(matches!(
        second,
        TriggerResult::Completed(LookupOutcome::TransportError { .. })
    ));
    server.verify().await;
}

#[tokio::test]
async fn blocked_submit_focuses_name_field_and_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (flow, sink) = flow_against(&server);
    let decision = flow.handle_submit(&RegistrationFields {
        nombre: "".to_string(),
        nit: "901234567".to_string(),
    });

    let SubmitDecision::Blocked(error) = decision else {
        panic!("el envío debía quedar bloqueado");
    };
    assert_eq!(error.field, Field::Nombre);
    assert_eq!(error.error, ValidationError::EmptyInput);

    let commands = sink.commands();
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Modal { kind: NotifyKind::Error, message, .. }
            if message == "El nombre de la empresa es obligatorio."
    )));
    assert!(commands
        .iter()
        .any(|c| matches!(c, PresentationCommand::Focus { field: Field::Nombre })));
    server.verify().await;
}

#[tokio::test]
async fn authorized_submit_sets_busy_state_and_notifies() {
    let server = MockServer::start().await;
    let (flow, sink) = flow_against(&server);

    let decision = flow.handle_submit(&RegistrationFields {
        nombre: "ACME S.A.".to_string(),
        nit: "901234567".to_string(),
    });

    assert_eq!(decision, SubmitDecision::Authorized);
    let commands = sink.commands();
    assert!(commands
        .iter()
        .any(|c| matches!(c, PresentationCommand::SetBusy { busy: true })));
    assert!(commands.iter().any(|c| matches!(
        c,
        PresentationCommand::Notify { kind: NotifyKind::Info, message, .. }
            if message.contains("Registrando proveedor")
    )));
}

#[tokio::test]
async fn stats_reflect_outcomes_and_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proveedor/consultar-nit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "html": "<div>ok</div>",
            "source": "local"
        })))
        .mount(&server)
        .await;

    let (flow, _sink) = flow_against(&server);
    flow.trigger_lookup("901234567").await;
    flow.trigger_lookup("abc").await;

    let stats = flow.stats();
    assert_eq!(stats.lookups, 1);
    assert_eq!(stats.found_local, 1);
    assert_eq!(stats.validation_rejections, 1);
    assert_eq!(stats.gate_rejections, 0);
}

#[test]
fn nit_input_filtering_flags_short_values() {
    let config = ProveedorConfig::default();
    let sink = Arc::new(RecordingSink::default());
    let flow = LookupFlow::new(config, Arc::new(StaticToken(String::new())), sink);

    let feedback = flow.filter_nit_input("901-23");
    assert_eq!(feedback.filtered, "90123");
    assert!(!feedback.length_ok);

    let feedback = flow.filter_nit_input("901.234.567");
    assert_eq!(feedback.filtered, "901234567");
    assert!(feedback.length_ok);

    let feedback = flow.filter_nit_input("");
    assert!(feedback.length_ok);
}
