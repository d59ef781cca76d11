//! Tool-specific error types.

use thiserror::Error;

/// Errors raised before a tool gets to run.
///
/// Backend failures are not errors at this level: they come back as a
/// structured failure payload inside a successful tool response.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ToolError::not_found("buy_now").to_string(),
            "Tool not found: buy_now"
        );
        assert_eq!(
            ToolError::invalid_arguments("missing field `query`").to_string(),
            "Invalid arguments: missing field `query`"
        );
    }
}
