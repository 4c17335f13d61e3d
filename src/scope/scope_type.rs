use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed catalog of scope tags.
///
/// Each supported domain contributes an instance tag and (except for `app`)
/// a matching definition tag. The serialized form is the literal tag string
/// persisted in identity links, so renaming a variant's tag is a breaking
/// change for every stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeType {
    /// A running case instance (CMMN).
    #[serde(rename = "cmmn")]
    Case,
    /// A running process instance (BPMN).
    #[serde(rename = "bpmn")]
    Process,
    /// A task instance, adhoc or created from a case/process model.
    #[serde(rename = "task")]
    Task,
    /// A rule instance (DMN).
    #[serde(rename = "dmn")]
    Rule,
    /// A document / content instance.
    #[serde(rename = "document")]
    Document,
    /// A conversation instance.
    #[serde(rename = "conversation")]
    Conversation,
    /// An app, containing any type of models. Has no definition counterpart.
    #[serde(rename = "app")]
    App,
    #[serde(rename = "cmmnDefinition")]
    CaseDefinition,
    #[serde(rename = "bpmnDefinition")]
    ProcessDefinition,
    #[serde(rename = "taskDefinition")]
    TaskDefinition,
    #[serde(rename = "dmnDefinition")]
    RuleDefinition,
    #[serde(rename = "documentDefinition")]
    DocumentDefinition,
    #[serde(rename = "conversationDefinition")]
    ConversationDefinition,
}

impl ScopeType {
    /// The literal tag string, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Case => "cmmn",
            ScopeType::Process => "bpmn",
            ScopeType::Task => "task",
            ScopeType::Rule => "dmn",
            ScopeType::Document => "document",
            ScopeType::Conversation => "conversation",
            ScopeType::App => "app",
            ScopeType::CaseDefinition => "cmmnDefinition",
            ScopeType::ProcessDefinition => "bpmnDefinition",
            ScopeType::TaskDefinition => "taskDefinition",
            ScopeType::RuleDefinition => "dmnDefinition",
            ScopeType::DocumentDefinition => "documentDefinition",
            ScopeType::ConversationDefinition => "conversationDefinition",
        }
    }

    /// Whether this tag addresses a running instance.
    pub fn is_instance(&self) -> bool {
        !self.is_definition()
    }

    /// Whether this tag addresses a deployed definition.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            ScopeType::CaseDefinition
                | ScopeType::ProcessDefinition
                | ScopeType::TaskDefinition
                | ScopeType::RuleDefinition
                | ScopeType::DocumentDefinition
                | ScopeType::ConversationDefinition
        )
    }

    /// The definition tag for this instance tag, if the domain has one.
    pub fn definition_counterpart(&self) -> Option<ScopeType> {
        match self {
            ScopeType::Case => Some(ScopeType::CaseDefinition),
            ScopeType::Process => Some(ScopeType::ProcessDefinition),
            ScopeType::Task => Some(ScopeType::TaskDefinition),
            ScopeType::Rule => Some(ScopeType::RuleDefinition),
            ScopeType::Document => Some(ScopeType::DocumentDefinition),
            ScopeType::Conversation => Some(ScopeType::ConversationDefinition),
            _ => None,
        }
    }

    /// The instance tag for this definition tag.
    pub fn instance_counterpart(&self) -> Option<ScopeType> {
        match self {
            ScopeType::CaseDefinition => Some(ScopeType::Case),
            ScopeType::ProcessDefinition => Some(ScopeType::Process),
            ScopeType::TaskDefinition => Some(ScopeType::Task),
            ScopeType::RuleDefinition => Some(ScopeType::Rule),
            ScopeType::DocumentDefinition => Some(ScopeType::Document),
            ScopeType::ConversationDefinition => Some(ScopeType::Conversation),
            _ => None,
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cmmn" => Ok(ScopeType::Case),
            "bpmn" => Ok(ScopeType::Process),
            "task" => Ok(ScopeType::Task),
            "dmn" => Ok(ScopeType::Rule),
            "document" => Ok(ScopeType::Document),
            "conversation" => Ok(ScopeType::Conversation),
            "app" => Ok(ScopeType::App),
            "cmmnDefinition" => Ok(ScopeType::CaseDefinition),
            "bpmnDefinition" => Ok(ScopeType::ProcessDefinition),
            "taskDefinition" => Ok(ScopeType::TaskDefinition),
            "dmnDefinition" => Ok(ScopeType::RuleDefinition),
            "documentDefinition" => Ok(ScopeType::DocumentDefinition),
            "conversationDefinition" => Ok(ScopeType::ConversationDefinition),
            other => Err(CaseError::InvalidScopeType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for tag in [
            "cmmn",
            "bpmn",
            "task",
            "dmn",
            "document",
            "conversation",
            "app",
            "cmmnDefinition",
            "bpmnDefinition",
            "taskDefinition",
            "dmnDefinition",
            "documentDefinition",
            "conversationDefinition",
        ] {
            let parsed: ScopeType = tag.parse().unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = "robot".parse::<ScopeType>().unwrap_err();
        assert!(matches!(err, CaseError::InvalidScopeType(t) if t == "robot"));
    }

    #[test]
    fn test_serde_uses_literal_tags() {
        assert_eq!(
            serde_json::to_string(&ScopeType::Case).unwrap(),
            "\"cmmn\""
        );
        assert_eq!(
            serde_json::to_string(&ScopeType::ProcessDefinition).unwrap(),
            "\"bpmnDefinition\""
        );
        let parsed: ScopeType = serde_json::from_str("\"taskDefinition\"").unwrap();
        assert_eq!(parsed, ScopeType::TaskDefinition);
    }

    #[test]
    fn test_counterparts() {
        assert_eq!(
            ScopeType::Case.definition_counterpart(),
            Some(ScopeType::CaseDefinition)
        );
        assert_eq!(
            ScopeType::RuleDefinition.instance_counterpart(),
            Some(ScopeType::Rule)
        );
        // app has no definition pair
        assert_eq!(ScopeType::App.definition_counterpart(), None);
        assert_eq!(ScopeType::Task.instance_counterpart(), None);
    }

    #[test]
    fn test_instance_definition_split() {
        assert!(ScopeType::Process.is_instance());
        assert!(ScopeType::App.is_instance());
        assert!(ScopeType::ProcessDefinition.is_definition());
        assert!(!ScopeType::ProcessDefinition.is_instance());
    }
}
