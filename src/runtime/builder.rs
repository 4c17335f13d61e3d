//! Fluent builder for starting a case instance.
//!
//! A builder moves from empty, through any number of setter calls, to a
//! single `start()`/`start_with_form()` call. Setters overwrite their field,
//! except the two variable setters, which merge by key into the existing map.
//! The builder is a single-writer accumulator: it is not safe for concurrent
//! mutation and is meant to start exactly one instance. After a successful
//! start the accumulated state stays readable through [`request`](Self::request)
//! for audit reads; there is no reset operation.

use crate::error::{CaseError, CaseResult};
use crate::runtime::engine::{CaseEngine, FormService};
use crate::runtime::instance::CaseInstance;
use crate::runtime::request::{CallbackReference, CaseInstanceRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Fluent accumulator for a [`CaseInstanceRequest`].
///
/// At least a case definition id or key must be set before starting;
/// everything else is optional. Use
/// [`start_with_form`](Self::start_with_form) to start out of an init form,
/// otherwise [`start`](Self::start).
pub struct CaseInstanceBuilder {
    engine: Arc<dyn CaseEngine>,
    form_service: Option<Arc<dyn FormService>>,
    request: CaseInstanceRequest,
}

impl CaseInstanceBuilder {
    pub fn new(engine: Arc<dyn CaseEngine>) -> Self {
        Self {
            engine,
            form_service: None,
            request: CaseInstanceRequest::default(),
        }
    }

    /// Set the form service consulted by [`start_with_form`](Self::start_with_form).
    pub fn form_service(mut self, form_service: Arc<dyn FormService>) -> Self {
        self.form_service = Some(form_service);
        self
    }

    /// Reference the case definition by id, pinning one deployed version.
    /// Takes precedence over [`case_definition_key`](Self::case_definition_key)
    /// when both are set.
    pub fn case_definition_id(mut self, id: impl Into<String>) -> Self {
        self.request.case_definition_id = Some(id.into());
        self
    }

    /// Reference the case definition by key; the engine resolves the latest
    /// deployed version under that key.
    pub fn case_definition_key(mut self, key: impl Into<String>) -> Self {
        self.request.case_definition_key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    /// Business key for later instance lookup.
    pub fn business_key(mut self, business_key: impl Into<String>) -> Self {
        self.request.business_key = Some(business_key.into());
        self
    }

    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.request.tenant_id = Some(tenant_id.into());
        self
    }

    /// Add a single persisted variable, overwriting any previous value under
    /// the same name.
    pub fn variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.request.variables.insert(name.into(), value);
        self
    }

    /// Merge a map of persisted variables into the ones already added.
    /// Later calls add to and overwrite earlier entries, never replace the
    /// whole map.
    pub fn variables(mut self, variables: HashMap<String, Value>) -> Self {
        self.request.variables.extend(variables);
        self
    }

    /// Add a single transient variable: visible during the first model
    /// evaluation, never persisted.
    pub fn transient_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.request.transient_variables.insert(name.into(), value);
        self
    }

    /// Merge a map of transient variables, with the same merge semantics as
    /// [`variables`](Self::variables). The two maps never cross-contaminate.
    pub fn transient_variables(mut self, variables: HashMap<String, Value>) -> Self {
        self.request.transient_variables.extend(variables);
        self
    }

    /// Init-form outcome; ignored by the engine when no init form exists.
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.request.outcome = Some(outcome.into());
        self
    }

    /// External owner of the instance. Callback type and id always travel
    /// together.
    pub fn callback(
        mut self,
        callback_type: impl Into<String>,
        callback_id: impl Into<String>,
    ) -> Self {
        self.request.callback = Some(CallbackReference {
            callback_type: callback_type.into(),
            callback_id: callback_id.into(),
        });
        self
    }

    /// Parent case instance id, making the new instance a sub-case.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.request.parent_id = Some(parent_id.into());
        self
    }

    /// The accumulated request state. After a start this is the permanent
    /// record of how the instance was started.
    pub fn request(&self) -> &CaseInstanceRequest {
        &self.request
    }

    fn freeze(&self) -> CaseResult<CaseInstanceRequest> {
        if self.request.definition_reference().is_none() {
            return Err(CaseError::MissingCaseDefinitionReference);
        }
        Ok(self.request.clone())
    }

    /// Start a new case instance from the accumulated state.
    ///
    /// Fails with [`CaseError::MissingCaseDefinitionReference`] before any
    /// engine call when neither a definition id nor a key is set. Engine-side
    /// rejections surface as [`CaseError::EngineRejected`]; no instance
    /// exists in that case.
    pub async fn start(&self) -> CaseResult<CaseInstance> {
        let request = self.freeze()?;
        self.dispatch(request).await
    }

    /// Start a new case instance through the definition's init form.
    ///
    /// Consults the form service to resolve the init form's field values and
    /// the outcome decision before starting. When no init form exists (or no
    /// form service is configured) this behaves exactly like
    /// [`start`](Self::start).
    pub async fn start_with_form(&self) -> CaseResult<CaseInstance> {
        let mut request = self.freeze()?;
        if let Some(form_service) = &self.form_service {
            if let Some(form) = form_service.resolve_init_form(&request).await? {
                // Resolved form values win over variables of the same name.
                request.variables.extend(form.variables);
                if form.outcome.is_some() {
                    request.outcome = form.outcome;
                }
            }
        }
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: CaseInstanceRequest) -> CaseResult<CaseInstance> {
        tracing::debug!(
            case_definition_id = request.case_definition_id.as_deref().unwrap_or(""),
            case_definition_key = request.case_definition_key.as_deref().unwrap_or(""),
            business_key = request.business_key.as_deref().unwrap_or(""),
            "starting case instance"
        );
        match self.engine.start_case(request).await {
            Ok(instance) => {
                tracing::debug!(case_instance_id = %instance.id, "case instance started");
                Ok(instance)
            }
            Err(err) => {
                tracing::warn!(error = %err, "case engine rejected start request");
                Err(err.into())
            }
        }
    }
}
