//! Validation error taxonomy
//!
//! Every rejection carries a stable string code so log lines can be
//! filtered in production. Validation failures are handled locally by
//! the flow (modal + focus) and never propagate further; transport and
//! not-found outcomes live in [`crate::types::LookupOutcome`].

use std::fmt;

/// Why an input field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed value is empty
    EmptyInput,
    /// Value does not match the expected shape (digits only, bounded length)
    FormatError,
}

impl ValidationError {
    /// Stable code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "VAL_EMPTY_INPUT",
            Self::FormatError => "VAL_FORMAT",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "[{}] el campo está vacío", self.code()),
            Self::FormatError => write!(f, "[{}] formato de campo inválido", self.code()),
        }
    }
}

impl std::error::Error for ValidationError {}
