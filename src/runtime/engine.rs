//! External collaborator seams for the start protocol.

use crate::error::EngineError;
use crate::runtime::instance::CaseInstance;
use crate::runtime::request::CaseInstanceRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// The case engine consuming finished start requests.
///
/// Resolves the definition key to the latest deployed version when no
/// definition id is present. Concurrency, cancellation, and timeouts are the
/// engine's concern, not this layer's.
#[async_trait]
pub trait CaseEngine: Send + Sync {
    async fn start_case(&self, request: CaseInstanceRequest) -> Result<CaseInstance, EngineError>;
}

/// Init-form field values and outcome, as resolved by the form service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedForm {
    /// Resolved field values, merged into the request's persisted variables.
    pub variables: HashMap<String, Value>,
    /// The final outcome decision, replacing the request's outcome when set.
    pub outcome: Option<String>,
}

/// Form service consulted by
/// [`CaseInstanceBuilder::start_with_form`](crate::runtime::CaseInstanceBuilder::start_with_form).
#[async_trait]
pub trait FormService: Send + Sync {
    /// Resolve the init form of the referenced definition against the
    /// request (including its outcome). Returns `None` when the definition
    /// has no init form.
    async fn resolve_init_form(
        &self,
        request: &CaseInstanceRequest,
    ) -> Result<Option<ResolvedForm>, EngineError>;
}
