//! Error Types for the Yield Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// The engine's only failure mode: a request it refuses to evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl AdvisorError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

impl From<AdvisorError> for advisor_core::CoreError {
    fn from(err: AdvisorError) -> Self {
        Self::ToolValidation(err.to_string())
    }
}

/// Failures of the portfolio / preference collaborators.
///
/// Kept apart from [`AdvisorError`]: callers log these and continue with the
/// field treated as absent.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::CoreError;

    #[test]
    fn test_invalid_input_names_field() {
        let err = AdvisorError::invalid_input("marketData.priceSwing", "must not be negative");
        assert_eq!(err.field(), "marketData.priceSwing");
        assert!(err.to_string().contains("`marketData.priceSwing`"));
    }

    #[test]
    fn test_maps_to_tool_validation() {
        let err: CoreError = AdvisorError::invalid_input("riskTolerance", "unknown level").into();
        assert!(err.is_caller_error());
        assert!(matches!(err, CoreError::ToolValidation(_)));
    }
}
