//! Top-level error taxonomy for the contract layer.

use super::EngineError;
use thiserror::Error;

/// Conditions raised by the contract layer. All of them are local,
/// synchronous, and non-retried: callers re-configure and try again.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("neither a case definition id nor a case definition key was set")]
    MissingCaseDefinitionReference,
    #[error("invalid scope type: {0}")]
    InvalidScopeType(String),
    #[error("invalid identity link: {0}")]
    IdentityLinkInvalid(String),
    #[error("case engine rejected the request: {0}")]
    EngineRejected(Box<EngineError>),
}

impl From<EngineError> for CaseError {
    fn from(value: EngineError) -> Self {
        CaseError::EngineRejected(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_error_display() {
        assert_eq!(
            CaseError::MissingCaseDefinitionReference.to_string(),
            "neither a case definition id nor a case definition key was set"
        );
        assert_eq!(
            CaseError::InvalidScopeType("bogus".into()).to_string(),
            "invalid scope type: bogus"
        );
        assert_eq!(
            CaseError::IdentityLinkInvalid("empty user id".into()).to_string(),
            "invalid identity link: empty user id"
        );
    }

    #[test]
    fn test_case_error_from_engine_error() {
        let err: CaseError = EngineError::new("boom").into();
        assert!(matches!(err, CaseError::EngineRejected(_)));
        assert_eq!(err.to_string(), "case engine rejected the request: boom");
    }
}
