//! Case runtime contract — the start-request protocol and its collaborators.
//!
//! - [`CaseInstanceBuilder`] — Fluent accumulator for a start request.
//! - [`CaseInstanceRequest`] — The frozen snapshot handed to the engine.
//! - [`CaseInstance`] — The running-instance handle the engine returns.
//! - [`CaseEngine`] / [`FormService`] — External collaborator seams.
//! - [`CaseRuntime`] — Entry point bundling the collaborators and vending
//!   pre-wired builders.

pub mod builder;
pub mod engine;
pub mod instance;
pub mod request;

pub use builder::CaseInstanceBuilder;
pub use engine::{CaseEngine, FormService, ResolvedForm};
pub use instance::CaseInstance;
pub use request::{CallbackReference, CaseInstanceRequest, DefinitionReference};

use std::sync::Arc;

/// Entry point for starting case instances.
///
/// Bundles the case engine and the optional form service and vends
/// [`CaseInstanceBuilder`]s wired to them.
#[derive(Clone)]
pub struct CaseRuntime {
    engine: Arc<dyn CaseEngine>,
    form_service: Option<Arc<dyn FormService>>,
}

impl CaseRuntime {
    pub fn new(engine: Arc<dyn CaseEngine>) -> Self {
        Self {
            engine,
            form_service: None,
        }
    }

    pub fn with_form_service(mut self, form_service: Arc<dyn FormService>) -> Self {
        self.form_service = Some(form_service);
        self
    }

    /// A fresh builder wired to this runtime's collaborators. Each builder
    /// is single-use per started instance.
    pub fn create_case_instance_builder(&self) -> CaseInstanceBuilder {
        let builder = CaseInstanceBuilder::new(self.engine.clone());
        match &self.form_service {
            Some(fs) => builder.form_service(fs.clone()),
            None => builder,
        }
    }
}
