// ⚠️ Errors - Validation failures and ledger-level errors
//
// Every check runs before any registry is touched, so an Err always means
// "nothing changed".

use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rejected value.
///
/// `entity` names the record kind ("Creator", "Work", "Relation"),
/// `field` the attribute that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{entity}] {field}: {message}")]
pub struct ValidationError {
    pub entity: String,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(entity: &str, field: &str, message: impl Into<String>) -> Self {
        let error = ValidationError {
            entity: entity.to_string(),
            field: field.to_string(),
            message: message.into(),
        };
        tracing::warn!(%error, "validation failed");
        error
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

// ============================================================================
// FIELD CHECKS
// ============================================================================

/// Non-empty text check shared by Creator.name and Work.title
pub(crate) fn non_empty(entity: &str, field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::new(entity, field, "must be a non-empty string"));
    }
    Ok(())
}

/// Amounts stay signed end to end; negative values are rejected here.
pub(crate) fn non_negative(entity: &str, field: &str, value: i64) -> ValidationResult<i64> {
    if value < 0 {
        return Err(ValidationError::new(
            entity,
            field,
            format!("must be a non-negative integer, got {}", value),
        ));
    }
    Ok(value)
}

// ============================================================================
// LEDGER ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed seed document: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

// ============================================================================
// TESTS
// ============================================================================
