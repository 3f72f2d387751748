//! Error Types

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Tool layer error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool arguments failed validation
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Tool execution failed
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether the caller sent something the tool could not accept
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::ToolValidation(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::ToolNotFound(name) => format!("The tool '{name}' is not available."),
            Self::ToolValidation(msg) => format!("Invalid tool input: {msg}"),
            Self::ToolExecution(msg) => format!("Tool error: {msg}"),
            Self::Json(_) => "The tool produced output that could not be encoded.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors() {
        assert!(CoreError::ToolNotFound("x".into()).is_caller_error());
        assert!(CoreError::ToolValidation("bad".into()).is_caller_error());
        assert!(!CoreError::ToolExecution("boom".into()).is_caller_error());
    }

    #[test]
    fn test_user_message_names_tool() {
        let err = CoreError::ToolNotFound("predict".into());
        assert_eq!(err.user_message(), "The tool 'predict' is not available.");
    }

    #[test]
    fn test_user_messages_per_variant() {
        assert_eq!(
            CoreError::ToolValidation("bad".into()).user_message(),
            "Invalid tool input: bad"
        );
        assert_eq!(CoreError::ToolExecution("boom".into()).user_message(), "Tool error: boom");

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::from(json);
        assert!(!err.is_caller_error());
        assert_eq!(err.user_message(), "The tool produced output that could not be encoded.");
    }
}
