//! Unified error types for the gateway domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No tool with the requested name.
    NotFound,
    /// Caller input was missing or malformed.
    InvalidInput,
    /// The external command could not be run or exited non-zero.
    ExecutionFailed,
    /// The transport cannot deliver what the peer asked for.
    Unsupported,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl GatewayError {
    /// Creates a new `GatewayError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({ctx})")?;
        }
        Ok(())
    }
}

impl std::error::Error for GatewayError {}

/// Turns technical errors into user-actionable diagnostics.
///
/// Implementors provide an optional `hint` (likely cause) and `fix`
/// (concrete remediation step) per error variant.
pub trait DiagnosticError {
    /// A human-readable explanation of the likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A concrete fix the user can apply.
    fn fix(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_context() {
        let err = GatewayError::new(ErrorKind::NotFound, "tool not found: radius_nope");
        assert_eq!(err.to_string(), "[NotFound] tool not found: radius_nope");
    }

    #[test]
    fn display_with_context() {
        let err = GatewayError::new(ErrorKind::InvalidInput, "missing parameter")
            .with_context("tool: radius_show_application");
        assert!(err.to_string().contains("radius_show_application"));
    }

    #[test]
    fn kind_serializes_snake_case() {
        let err = GatewayError::new(ErrorKind::ExecutionFailed, "exit status 1");
        let json = serde_json::to_string(&err).expect("serialize");
        assert!(json.contains("\"execution_failed\""));
        let back: GatewayError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::ExecutionFailed);
    }

    #[test]
    fn diagnostic_trait_defaults_to_none() {
        struct Dummy;
        impl DiagnosticError for Dummy {}
        assert!(Dummy.hint().is_none());
        assert!(Dummy.fix().is_none());
    }
}
