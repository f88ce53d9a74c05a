//! Input validation
//!
//! Pure functions, no side effects. Callers trim whitespace before
//! validating; nothing is stripped implicitly.

use crate::config::ValidationRules;
use crate::errors::ValidationError;
use crate::types::NitValue;

/// Validate a NIT against the default length bounds (7-15 digits)
pub fn validate_nit(raw: &str) -> Result<NitValue, ValidationError> {
    validate_nit_with(raw, &ValidationRules::default())
}

/// Validate a NIT against explicit rules. Digits only, length within
/// `[nit_min_length, nit_max_length]`. Returns the digit string unchanged.
pub fn validate_nit_with(
    raw: &str,
    rules: &ValidationRules,
) -> Result<NitValue, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let digits_only = raw.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || raw.len() < rules.nit_min_length || raw.len() > rules.nit_max_length {
        return Err(ValidationError::FormatError);
    }
    Ok(NitValue(raw.to_string()))
}

/// Required-text check: fails on empty trimmed value, otherwise returns
/// the trimmed value.
pub fn validate_required_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Strip every non-digit character (live-input filter for the NIT field)
pub fn filter_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Length check for the filtered NIT input: empty is acceptable while the
/// user is still typing, otherwise the default bounds apply.
pub fn is_length_valid(filtered: &str) -> bool {
    is_length_valid_with(filtered, &ValidationRules::default())
}

pub fn is_length_valid_with(filtered: &str, rules: &ValidationRules) -> bool {
    filtered.is_empty()
        || (filtered.len() >= rules.nit_min_length && filtered.len() <= rules.nit_max_length)
}

/// Minimal `local@domain.tld` shape check for blur validation of email
/// fields. Not an RFC parser.
pub fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !trimmed.contains(char::is_whitespace)
}
