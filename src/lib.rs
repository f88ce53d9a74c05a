//! Proveedor Lookup Library
//!
//! Client-side flow for the supplier management feature:
//! - NIT lookup against the consultar-nit endpoint, classified into
//!   found / not-found / transport-error outcomes
//! - Single-flight guard so rapid repeated triggers issue one request
//! - Registration-form validation gating
//! - UI-toolkit-agnostic presentation commands via an injected sink

pub mod client;
pub mod config;
pub mod errors;
pub mod flow;
pub mod form;
pub mod gate;
pub mod presenter;
pub mod stats;
pub mod types;
pub mod validator;

pub use client::{CsrfTokenProvider, LookupClient, NoToken, StaticToken};
pub use config::{Endpoints, Messages, ProveedorConfig, ValidationRules};
pub use errors::ValidationError;
pub use flow::{LookupFlow, UiSink};
pub use form::FormSubmitGuard;
pub use gate::{GateGuard, RequestGate};
pub use presenter::ResponsePresenter;
pub use stats::{LookupStats, StatsSnapshot};
pub use types::{
    Field, FieldError, LookupOutcome, NitInputFeedback, NitValue, NotifyKind,
    PresentationCommand, RegistrationFields, Source, SubmitDecision, TriggerResult,
};
pub use validator::{
    filter_digits, is_length_valid, is_valid_email, validate_nit, validate_required_text,
};
