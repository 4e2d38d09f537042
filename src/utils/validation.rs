use crate::utils::error::{RelatoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// True iff `text` has between 1 and `max_len` characters and at least one
/// of them is not whitespace.
pub fn is_non_blank_within_length(text: &str, max_len: usize) -> bool {
    let len = text.chars().count();
    if len == 0 || len > max_len {
        return false;
    }
    text.chars().any(|c| !c.is_whitespace())
}

/// True iff `text` contains an `@`, is longer than 4 characters and ends
/// with the literal suffix `.com` (case-sensitive).
pub fn is_valid_email(text: &str) -> bool {
    text.contains('@') && text.chars().count() > 4 && text.ends_with(".com")
}

pub fn validate_text(field_name: &str, value: &str, max_len: usize) -> Result<()> {
    if !is_non_blank_within_length(value, max_len) {
        return Err(RelatoError::ValidationError {
            field: field_name.to_string(),
            reason: format!(
                "must be 1 to {} characters and not only whitespace",
                max_len
            ),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !is_valid_email(value) {
        return Err(RelatoError::ValidationError {
            field: field_name.to_string(),
            reason: "must contain '@' and end with '.com'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(RelatoError::ValidationError {
            field: field_name.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}
