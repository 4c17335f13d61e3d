//! End-to-end tests over the public API: runtime wiring, the start protocol
//! against mocked collaborators, and wire compatibility of stored records.

use async_trait::async_trait;
use caseflow::{
    link_types, CaseEngine, CaseError, CaseInstance, CaseInstanceRequest, CaseRuntime,
    EngineError, FormService, IdentityLink, IdentityLinkStore, InMemoryIdentityLinkStore,
    Principal, ResolvedForm, ScopeAddress, ScopeType,
};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct StubEngine {
    calls: AtomicUsize,
    last_request: Mutex<Option<CaseInstanceRequest>>,
}

#[async_trait]
impl CaseEngine for StubEngine {
    async fn start_case(&self, request: CaseInstanceRequest) -> Result<CaseInstance, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let instance = CaseInstance {
            id: format!("CI-{}", self.calls.load(Ordering::SeqCst)),
            case_definition_id: request
                .case_definition_id
                .clone()
                .unwrap_or_else(|| "caseDef-latest".into()),
            name: request.name.clone(),
            business_key: request.business_key.clone(),
            tenant_id: request.tenant_id.clone(),
            parent_id: request.parent_id.clone(),
            callback: request.callback.clone(),
            start_time: None,
        };
        *self.last_request.lock() = Some(request);
        Ok(instance)
    }
}

struct LoanInitForm;

#[async_trait]
impl FormService for LoanInitForm {
    async fn resolve_init_form(
        &self,
        request: &CaseInstanceRequest,
    ) -> Result<Option<ResolvedForm>, EngineError> {
        let mut variables = HashMap::new();
        variables.insert("reviewed".to_string(), json!(true));
        Ok(Some(ResolvedForm {
            variables,
            outcome: request.outcome.clone(),
        }))
    }
}

#[tokio::test]
async fn test_runtime_start_by_key() {
    let engine = Arc::new(StubEngine::default());
    let runtime = CaseRuntime::new(engine.clone());

    let instance = runtime
        .create_case_instance_builder()
        .case_definition_key("loanApproval")
        .business_key("LN-42")
        .variable("amount", json!(5000))
        .start()
        .await
        .unwrap();

    assert_eq!(instance.business_key.as_deref(), Some("LN-42"));
    assert_eq!(instance.case_definition_id, "caseDef-latest");
    let request = engine.last_request.lock().clone().unwrap();
    assert_eq!(request.variables.get("amount"), Some(&json!(5000)));
}

#[tokio::test]
async fn test_runtime_missing_definition_reference() {
    let engine = Arc::new(StubEngine::default());
    let runtime = CaseRuntime::new(engine.clone());

    let err = runtime
        .create_case_instance_builder()
        .business_key("LN-42")
        .start()
        .await
        .unwrap_err();

    assert!(matches!(err, CaseError::MissingCaseDefinitionReference));
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_runtime_start_with_form_wired_through() {
    let engine = Arc::new(StubEngine::default());
    let runtime = CaseRuntime::new(engine.clone()).with_form_service(Arc::new(LoanInitForm));

    runtime
        .create_case_instance_builder()
        .case_definition_key("loanApproval")
        .outcome("approve")
        .start_with_form()
        .await
        .unwrap();

    let request = engine.last_request.lock().clone().unwrap();
    assert_eq!(request.variables.get("reviewed"), Some(&json!(true)));
    assert_eq!(request.outcome.as_deref(), Some("approve"));
}

#[tokio::test]
async fn test_two_builders_start_independent_instances() {
    let engine = Arc::new(StubEngine::default());
    let runtime = CaseRuntime::new(engine.clone());

    let first = runtime
        .create_case_instance_builder()
        .case_definition_key("loanApproval")
        .start()
        .await
        .unwrap();
    let second = runtime
        .create_case_instance_builder()
        .case_definition_key("loanApproval")
        .start()
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_grant_links_for_started_instance() {
    let engine = Arc::new(StubEngine::default());
    let runtime = CaseRuntime::new(engine);
    let store = InMemoryIdentityLinkStore::new();

    let instance = runtime
        .create_case_instance_builder()
        .case_definition_id("caseDef-3")
        .start()
        .await
        .unwrap();

    let address = ScopeAddress::instance(ScopeType::Case, instance.id.clone())
        .unwrap()
        .with_definition_id(instance.case_definition_id.clone());
    let link = IdentityLink::new(
        link_types::STARTER,
        Principal::User("alice".into()),
        address.clone(),
    )
    .unwrap();
    store.grant(link).await.unwrap();

    let found = store.find_by_address(&address).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user_id(), Some("alice"));
    assert_eq!(found[0].scope_id(), Some(instance.id.as_str()));
    assert_eq!(found[0].scope_definition_id(), Some("caseDef-3"));
}

#[test]
fn test_stored_record_layout_compatibility() {
    // A record shaped the way the platform persists task assignee links.
    let stored = json!({
        "type": "assignee",
        "userId": "alice",
        "scopeType": "task",
        "scopeId": "T-1"
    });
    let link: IdentityLink = serde_json::from_value(stored).unwrap();
    assert_eq!(link.link_type(), "assignee");
    assert_eq!(link.task_id(), Some("T-1"));
    assert_eq!(link.process_instance_id(), None);

    // Definition-scoped start permission.
    let stored = json!({
        "type": "starter",
        "groupId": "loan-officers",
        "scopeType": "cmmnDefinition",
        "scopeDefinitionId": "caseDef-3"
    });
    let link: IdentityLink = serde_json::from_value(stored).unwrap();
    assert_eq!(link.scope_id(), None);
    assert_eq!(link.scope_definition_id(), Some("caseDef-3"));
    assert_eq!(link.group_id(), Some("loan-officers"));
}
