//! # Caseflow — Contract Layer for Multi-Engine Case Orchestration
//!
//! `caseflow` is the contract layer of a multi-engine workflow platform
//! (case/process/task orchestration). It carries no execution, persistence,
//! or scheduling logic; it defines:
//!
//! - **Scope addressing**: the rules that let one identity-link record and
//!   one instance start request refer unambiguously to a running instance or
//!   a startable definition across heterogeneous engine kinds ([`scope`]).
//! - **Identity links**: permission grants (assignee, owner, candidate, ...)
//!   from a user or group to a scoped instance or definition ([`identity`]).
//! - **Case start protocol**: a fluent builder assembling an immutable start
//!   request and handing it to an external case engine, optionally through
//!   an init form ([`runtime`]).
//! - **Authorization hooks**: a single check-access capability a REST façade
//!   invokes before acting on a resource ([`authz`]).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use caseflow::{CaseEngine, CaseRuntime};
//! use std::sync::Arc;
//!
//! async fn start(engine: Arc<dyn CaseEngine>) -> Result<(), caseflow::CaseError> {
//!     let runtime = CaseRuntime::new(engine);
//!     let instance = runtime
//!         .create_case_instance_builder()
//!         .case_definition_key("loanApproval")
//!         .business_key("LN-42")
//!         .variable("amount", serde_json::json!(5000))
//!         .start()
//!         .await?;
//!     println!("started {}", instance.id);
//!     Ok(())
//! }
//! ```

pub mod authz;
pub mod error;
pub mod identity;
pub mod runtime;
pub mod scope;

pub use crate::authz::{
    AccessCheck, AccessDenied, AccessOperation, AllowAllInterceptor, LoggingInterceptor,
    ResourceKind, RestAccessInterceptor,
};
pub use crate::error::{CaseError, CaseResult, EngineError};
pub use crate::identity::{
    link_types, IdentityLink, IdentityLinkStore, InMemoryIdentityLinkStore, Principal,
};
pub use crate::runtime::{
    CallbackReference, CaseEngine, CaseInstance, CaseInstanceBuilder, CaseInstanceRequest,
    CaseRuntime, DefinitionReference, FormService, ResolvedForm,
};
pub use crate::scope::{ScopeAddress, ScopeType};
