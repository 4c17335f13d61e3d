//! Authorization hook surface for a REST façade.
//!
//! The surrounding REST layer calls [`RestAccessInterceptor::check_access`]
//! before acting on a resource: returning `Ok(())` grants access, returning
//! [`AccessDenied`] aborts the operation. One capability parameterized by
//! resource kind and operation kind covers the whole façade, so adding a
//! resource kind needs no new hook method. The core never calls these hooks
//! itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The resource kinds exposed by the REST façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Task,
    Execution,
    ProcessInstance,
    CaseInstance,
    ProcessDefinition,
    CaseDefinition,
    EventSubscription,
    Job,
    TimerJob,
    SuspendedJob,
    DeadLetterJob,
    Deployment,
    Model,
    HistoricTask,
    HistoricProcessInstance,
    HistoricCaseInstance,
    HistoricActivity,
    HistoricDetail,
    HistoricVariable,
    User,
    Group,
    Management,
}

/// What the façade is about to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessOperation {
    ReadById,
    ReadByQuery,
    Create,
    Delete,
    /// Non-CRUD operations: signal sending, activity-state changes, new
    /// deployments, management info.
    Execute,
}

/// One access decision: the resource kind, the operation, and the resource
/// or query object about to be acted on (as its JSON representation).
#[derive(Debug, Clone)]
pub struct AccessCheck<'a> {
    pub resource: ResourceKind,
    pub operation: AccessOperation,
    pub payload: Option<&'a Value>,
}

impl<'a> AccessCheck<'a> {
    pub fn new(resource: ResourceKind, operation: AccessOperation) -> Self {
        Self {
            resource,
            operation,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: &'a Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Raised by an interceptor to deny access.
#[derive(Debug, Clone, Error)]
#[error("access denied: {operation:?} on {resource:?}: {reason}")]
pub struct AccessDenied {
    pub resource: ResourceKind,
    pub operation: AccessOperation,
    pub reason: String,
}

impl AccessDenied {
    pub fn new(check: &AccessCheck<'_>, reason: impl Into<String>) -> Self {
        Self {
            resource: check.resource,
            operation: check.operation,
            reason: reason.into(),
        }
    }
}

/// Access hook invoked by the REST layer before/around an operation.
pub trait RestAccessInterceptor: Send + Sync {
    fn check_access(&self, check: &AccessCheck<'_>) -> Result<(), AccessDenied>;
}

/// Grants every access. The default when a façade has no authorization
/// requirements.
pub struct AllowAllInterceptor;

impl RestAccessInterceptor for AllowAllInterceptor {
    fn check_access(&self, _check: &AccessCheck<'_>) -> Result<(), AccessDenied> {
        Ok(())
    }
}

/// Decorator logging every decision of the wrapped interceptor through
/// `tracing`: grants at debug level, denials at warn level.
pub struct LoggingInterceptor<I> {
    inner: I,
}

impl<I: RestAccessInterceptor> LoggingInterceptor<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: RestAccessInterceptor> RestAccessInterceptor for LoggingInterceptor<I> {
    fn check_access(&self, check: &AccessCheck<'_>) -> Result<(), AccessDenied> {
        match self.inner.check_access(check) {
            Ok(()) => {
                tracing::debug!(
                    resource = ?check.resource,
                    operation = ?check.operation,
                    "access granted"
                );
                Ok(())
            }
            Err(denied) => {
                tracing::warn!(
                    resource = ?check.resource,
                    operation = ?check.operation,
                    reason = %denied.reason,
                    "access denied"
                );
                Err(denied)
            }
        }
    }
}
