//! The frozen start-request snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Reference to an external object owning a case instance, e.g. the parent
/// workflow step the instance was started on behalf of. Type and id always
/// travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackReference {
    pub callback_type: String,
    pub callback_id: String,
}

/// How the engine should resolve the case definition: an id pins one deployed
/// version, a key resolves to the latest deployed version under that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionReference {
    Id(String),
    Key(String),
}

/// Everything needed to start one case instance.
///
/// Produced by freezing a [`CaseInstanceBuilder`](crate::runtime::CaseInstanceBuilder)
/// at start time; once handed to the engine it is a snapshot and further
/// builder mutation does not affect the started instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInstanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_definition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Persisted variables, available from the first model evaluation on.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, Value>,
    /// Variables visible only during the first model evaluation, then dropped.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub transient_variables: HashMap<String, Value>,
    /// Init-form outcome; ignored by the engine when no init form exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<CallbackReference>,
    /// Parent case instance id, when this instance is a sub-case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CaseInstanceRequest {
    /// The definition reference the engine should resolve. The id takes
    /// precedence over the key when both are set.
    pub fn definition_reference(&self) -> Option<DefinitionReference> {
        if let Some(id) = &self.case_definition_id {
            Some(DefinitionReference::Id(id.clone()))
        } else {
            self.case_definition_key
                .as_ref()
                .map(|key| DefinitionReference::Key(key.clone()))
        }
    }
}
