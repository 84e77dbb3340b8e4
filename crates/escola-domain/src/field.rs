/// Field-level validation failure. `.0` is the wire name of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing or empty field `{0}`")]
    Missing(&'static str),
    #[error("invalid value for field `{0}`")]
    Invalid(&'static str),
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(f) | Self::Invalid(f) => f,
        }
    }
}

/// Require a non-blank string. Returns the trimmed value.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_owned()),
        _ => Err(FieldError::Missing(field)),
    }
}

/// Validate an optional replacement for a required string field (partial update).
/// `None` means "keep the stored value"; a supplied blank string is rejected.
pub fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, FieldError> {
    value.map(|v| require_text(field, Some(v))).transpose()
}

/// Normalize an optional free-text field: blank becomes `None`.
pub fn nullable_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Require a present value of any type.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing(field))
}

/// Require a non-negative integer.
pub fn non_negative(field: &'static str, value: i32) -> Result<i32, FieldError> {
    if value < 0 {
        return Err(FieldError::Invalid(field));
    }
    Ok(value)
}
