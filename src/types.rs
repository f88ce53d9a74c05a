//! Core data types for the lookup flow
//! Outcomes, presentation commands and form field descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// A validated NIT: digits only, length within the configured bounds.
/// Only [`crate::validator::validate_nit`] constructs one, so no
/// partially-valid value ever reaches the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NitValue(pub(crate) String);

impl NitValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a found supplier record came from. Cosmetic metadata: it labels
/// the success notification and the stats counters, never a branch in
/// the lookup logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Local,
    Remote,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Local => "local",
            Source::Remote => "remote",
        }
    }
}

/// Classified result of one completed lookup request.
/// Exactly one variant is active per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LookupOutcome {
    /// Supplier found; `html` is server-rendered panel content
    Found {
        source: Source,
        html: String,
        warning: Option<String>,
    },
    /// Backend answered but has no record for this NIT
    NotFound { message: String },
    /// No structured response: network failure, non-2xx status or
    /// malformed payload
    TransportError {
        message: String,
        status: Option<u16>,
    },
}

/// Severity of a notification or modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotifyKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotifyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
            NotifyKind::Warning => "warning",
            NotifyKind::Info => "info",
        }
    }
}

/// Registration form fields the module reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Nombre,
    Nit,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Nit => "nit",
        }
    }
}

/// UI-toolkit-agnostic presentation command. The core never builds
/// markup; the sink implementation owns the rendering details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PresentationCommand {
    /// Replace the result area with server-rendered content
    RenderResult { html: String },
    /// Show the "not found" panel
    RenderNotFound { message: String },
    /// Show the error panel
    RenderError { message: String },
    /// Show the loading indicator in the result area
    RenderLoading { message: String },
    /// Toast notification
    Notify {
        kind: NotifyKind,
        title: String,
        message: String,
        auto_hide: bool,
    },
    /// Modal dialog
    Modal {
        kind: NotifyKind,
        title: String,
        message: String,
    },
    /// Move input focus to a form field
    Focus { field: Field },
    /// Toggle the busy state of the triggering control
    SetBusy { busy: bool },
}

/// A validation failure tied to the field that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

/// Result of one lookup trigger (click or Enter key)
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerResult {
    /// A request was issued and classified
    Completed(LookupOutcome),
    /// Input validation failed; no request was issued
    Rejected(ValidationError),
    /// A lookup was already in flight; trigger ignored
    Busy,
}

/// Decision for a registration form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Proceed with the normal server-bound form POST
    Authorized,
    /// Submission blocked; first failure selects modal and focus
    Blocked(FieldError),
}

/// Field values read from the registration form at submission time
#[derive(Debug, Clone, Default)]
pub struct RegistrationFields {
    pub nombre: String,
    pub nit: String,
}

/// Live-input feedback for the NIT field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NitInputFeedback {
    /// Input with every non-digit stripped
    pub filtered: String,
    /// True when empty or within the configured length bounds
    pub length_ok: bool,
}
