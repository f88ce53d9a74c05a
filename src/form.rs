//! Registration form submit guard
//!
//! Validates the manual-registration fields before the normal
//! server-bound form POST. The guard only decides; the flow emits the
//! cosmetic side effects (busy control, notification).

use crate::config::ValidationRules;
use crate::types::{Field, FieldError, RegistrationFields};
use crate::validator::{validate_nit_with, validate_required_text};

pub struct FormSubmitGuard {
    rules: ValidationRules,
}

impl FormSubmitGuard {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Check `nombre` then `nit`, in that order. All failures are
    /// collected; the first one selects the modal message and the field
    /// that receives focus.
    pub fn can_submit(&self, fields: &RegistrationFields) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(error) = validate_required_text(&fields.nombre) {
            errors.push(FieldError {
                field: Field::Nombre,
                error,
            });
        }
        if let Err(error) = validate_nit_with(fields.nit.trim(), &self.rules) {
            errors.push(FieldError {
                field: Field::Nit,
                error,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
