//! Error types for rendering
//!
//! Only malformed input and bad configuration are errors. Unrecognized node kinds are
//! not: they go through the fallback dump rule in the visitor.

use thiserror::Error;

/// Errors produced while rendering a document tree or preparing its layout.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document tree broke a shape invariant the upstream parser guarantees
    /// (wrong child count, missing title, domain without role...).
    ///
    /// Processing of the current document stops; callers decide whether to skip it
    /// or fail the whole batch.
    #[error("contract violation in `{kind}` node: {reason}")]
    ContractViolation {
        /// Kind tag of the offending node.
        kind: String,
        /// What was expected versus what was found.
        reason: String,
    },

    /// A layout was requested with a width that cannot hold a single column.
    #[error("invalid layout width {0}: at least one column is required")]
    InvalidWidth(usize),

    /// A theme entry could not be parsed as a color.
    #[error("invalid color '{value}' for theme entry `{key}`")]
    InvalidColor { key: String, value: String },

    /// Configuration sources could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A document tree could not be read from JSON.
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub fn contract(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::ContractViolation {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for malformed-input errors, as opposed to configuration problems.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, RenderError::ContractViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_message() {
        let err = RenderError::contract("directive", "domain `py` given without a role");
        assert!(err.is_contract_violation());
        assert_eq!(
            err.to_string(),
            "contract violation in `directive` node: domain `py` given without a role"
        );
    }

    #[test]
    fn test_invalid_width_is_not_a_contract_violation() {
        let err = RenderError::InvalidWidth(0);
        assert!(!err.is_contract_violation());
        assert_eq!(
            err.to_string(),
            "invalid layout width 0: at least one column is required"
        );
    }
}
