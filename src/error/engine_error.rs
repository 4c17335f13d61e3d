use serde_json::Value;
use thiserror::Error;

/// Failure reported by an external collaborator (case engine, form service,
/// identity-link store). The contract layer treats it as opaque: it is never
/// retried here, only surfaced to the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
    /// Optional structured detail (e.g. the offending definition key or a
    /// sentry evaluation trace), as reported by the collaborator.
    pub detail: Option<Value>,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::new("no deployed definition for key 'x'").to_string(),
            "no deployed definition for key 'x'"
        );
    }

    #[test]
    fn test_engine_error_detail() {
        let err = EngineError::new("tenant mismatch")
            .with_detail(serde_json::json!({"tenantId": "acme"}));
        assert_eq!(err.detail.unwrap()["tenantId"], "acme");
    }
}
