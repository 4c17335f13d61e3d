//! Identity link records.
//!
//! An identity link grants a permission (assignee, owner, candidate, ...) to
//! exactly one principal — a user or a group — over a scoped instance or a
//! definition. Links are produced and destroyed by the owning engine; this
//! type exposes a read-only accessor surface and validates its contract at
//! construction time. The reference to the scoped object is logical: nothing
//! here enforces that the addressed instance still exists.

use crate::error::CaseError;
use crate::scope::{ScopeAddress, ScopeType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The principal a permission is granted to. A user grant is personal; a
/// group grant applies to every member of the group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    User(String),
    Group(String),
}

impl Principal {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Principal::User(id) => Some(id),
            Principal::Group(_) => None,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            Principal::User(_) => None,
            Principal::Group(id) => Some(id),
        }
    }

    fn id(&self) -> &str {
        match self {
            Principal::User(id) | Principal::Group(id) => id,
        }
    }
}

/// A permission grant over a scoped instance or definition.
///
/// Serializes to the flat record layout
/// `{type, userId?, groupId?, scopeType, scopeId?, scopeDefinitionId?, createTime?}`;
/// deserializing a record with neither or both principal ids fails with
/// [`CaseError::IdentityLinkInvalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityLinkWire", into = "IdentityLinkWire")]
pub struct IdentityLink {
    link_type: String,
    principal: Principal,
    address: ScopeAddress,
    create_time: Option<DateTime<Utc>>,
}

impl IdentityLink {
    /// Create a link, validating the permission tag and the principal id.
    pub fn new(
        link_type: impl Into<String>,
        principal: Principal,
        address: ScopeAddress,
    ) -> Result<Self, CaseError> {
        let link_type = link_type.into();
        if link_type.trim().is_empty() {
            return Err(CaseError::IdentityLinkInvalid(
                "permission type must not be empty".into(),
            ));
        }
        if principal.id().trim().is_empty() {
            return Err(CaseError::IdentityLinkInvalid(
                "principal id must not be empty".into(),
            ));
        }
        Ok(Self {
            link_type,
            principal,
            address,
            create_time: None,
        })
    }

    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// The permission type, e.g. `assignee` or `candidate`.
    pub fn link_type(&self) -> &str {
        &self.link_type
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn user_id(&self) -> Option<&str> {
        self.principal.user_id()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.principal.group_id()
    }

    pub fn address(&self) -> &ScopeAddress {
        &self.address
    }

    pub fn scope_type(&self) -> ScopeType {
        self.address.scope_type()
    }

    pub fn scope_id(&self) -> Option<&str> {
        self.address.scope_id()
    }

    pub fn scope_definition_id(&self) -> Option<&str> {
        self.address.scope_definition_id()
    }

    pub fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    /// Legacy view: the scope id when this is a task-scoped link.
    ///
    /// Kept for consumers of the historic record layout; carries no state of
    /// its own. Prefer [`scope_id`](Self::scope_id).
    pub fn task_id(&self) -> Option<&str> {
        if self.scope_type() == ScopeType::Task {
            self.address.scope_id()
        } else {
            None
        }
    }

    /// Legacy view: the scope id when this is a process-instance-scoped link.
    ///
    /// Kept for consumers of the historic record layout; carries no state of
    /// its own. Prefer [`scope_id`](Self::scope_id).
    pub fn process_instance_id(&self) -> Option<&str> {
        if self.scope_type() == ScopeType::Process {
            self.address.scope_id()
        } else {
            None
        }
    }
}

/// Flat record layout of [`IdentityLink`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityLinkWire {
    #[serde(rename = "type")]
    link_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
    scope_type: ScopeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
}

impl TryFrom<IdentityLinkWire> for IdentityLink {
    type Error = CaseError;

    fn try_from(wire: IdentityLinkWire) -> Result<Self, Self::Error> {
        let principal = match (wire.user_id, wire.group_id) {
            (Some(user_id), None) => Principal::User(user_id),
            (None, Some(group_id)) => Principal::Group(group_id),
            (None, None) => {
                return Err(CaseError::IdentityLinkInvalid(
                    "neither userId nor groupId is set".into(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(CaseError::IdentityLinkInvalid(
                    "both userId and groupId are set".into(),
                ))
            }
        };
        let address = if wire.scope_type.is_definition() {
            if wire.scope_id.is_some() {
                return Err(CaseError::IdentityLinkInvalid(format!(
                    "definition tag '{}' must not carry a scopeId",
                    wire.scope_type
                )));
            }
            let scope_definition_id = wire.scope_definition_id.ok_or_else(|| {
                CaseError::IdentityLinkInvalid(format!(
                    "definition tag '{}' requires a scopeDefinitionId",
                    wire.scope_type
                ))
            })?;
            ScopeAddress::definition(wire.scope_type, scope_definition_id)
                .map_err(address_error_to_link_error)?
        } else {
            let scope_id = wire.scope_id.ok_or_else(|| {
                CaseError::IdentityLinkInvalid(format!(
                    "instance tag '{}' requires a scopeId",
                    wire.scope_type
                ))
            })?;
            let address = ScopeAddress::instance(wire.scope_type, scope_id)
                .map_err(address_error_to_link_error)?;
            match wire.scope_definition_id {
                Some(definition_id) => address.with_definition_id(definition_id),
                None => address,
            }
        };
        let link = IdentityLink::new(wire.link_type, principal, address)?;
        Ok(match wire.create_time {
            Some(t) => link.with_create_time(t),
            None => link,
        })
    }
}

/// A stored record violating the address shape is a broken link record, not
/// a bare scope-type problem.
fn address_error_to_link_error(err: CaseError) -> CaseError {
    match err {
        CaseError::InvalidScopeType(msg) => CaseError::IdentityLinkInvalid(msg),
        other => other,
    }
}

impl From<IdentityLink> for IdentityLinkWire {
    fn from(link: IdentityLink) -> Self {
        let (user_id, group_id) = match &link.principal {
            Principal::User(id) => (Some(id.clone()), None),
            Principal::Group(id) => (None, Some(id.clone())),
        };
        IdentityLinkWire {
            scope_type: link.address.scope_type(),
            scope_id: link.address.scope_id().map(str::to_owned),
            scope_definition_id: link.address.scope_definition_id().map(str::to_owned),
            link_type: link.link_type,
            user_id,
            group_id,
            create_time: link.create_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::link_types;

    fn task_link() -> IdentityLink {
        IdentityLink::new(
            link_types::ASSIGNEE,
            Principal::User("alice".into()),
            ScopeAddress::instance(ScopeType::Task, "T-1").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let link = task_link();
        assert_eq!(link.link_type(), "assignee");
        assert_eq!(link.user_id(), Some("alice"));
        assert_eq!(link.group_id(), None);
        assert_eq!(link.scope_type(), ScopeType::Task);
        assert_eq!(link.scope_id(), Some("T-1"));
        assert_eq!(link.scope_definition_id(), None);
    }

    #[test]
    fn test_legacy_task_id_view() {
        let link = task_link();
        assert_eq!(link.task_id(), Some("T-1"));
        assert_eq!(link.process_instance_id(), None);
    }

    #[test]
    fn test_legacy_process_instance_id_view() {
        let link = IdentityLink::new(
            link_types::PARTICIPANT,
            Principal::Group("sales".into()),
            ScopeAddress::instance(ScopeType::Process, "P-7").unwrap(),
        )
        .unwrap();
        assert_eq!(link.process_instance_id(), Some("P-7"));
        assert_eq!(link.task_id(), None);
        assert_eq!(link.group_id(), Some("sales"));
        assert_eq!(link.user_id(), None);
    }

    #[test]
    fn test_legacy_views_absent_for_definition_links() {
        let link = IdentityLink::new(
            link_types::STARTER,
            Principal::User("bob".into()),
            ScopeAddress::definition(ScopeType::CaseDefinition, "caseDef-3").unwrap(),
        )
        .unwrap();
        assert_eq!(link.task_id(), None);
        assert_eq!(link.process_instance_id(), None);
        assert_eq!(link.scope_id(), None);
        assert_eq!(link.scope_definition_id(), Some("caseDef-3"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let addr = ScopeAddress::instance(ScopeType::Task, "T-1").unwrap();
        assert!(matches!(
            IdentityLink::new("", Principal::User("alice".into()), addr.clone()),
            Err(CaseError::IdentityLinkInvalid(_))
        ));
        assert!(matches!(
            IdentityLink::new(link_types::OWNER, Principal::User("  ".into()), addr),
            Err(CaseError::IdentityLinkInvalid(_))
        ));
    }

    #[test]
    fn test_wire_roundtrip() {
        let link = IdentityLink::new(
            link_types::CANDIDATE,
            Principal::Group("approvers".into()),
            ScopeAddress::instance(ScopeType::Case, "C-5")
                .unwrap()
                .with_definition_id("caseDef-9"),
        )
        .unwrap();
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "candidate",
                "groupId": "approvers",
                "scopeType": "cmmn",
                "scopeId": "C-5",
                "scopeDefinitionId": "caseDef-9"
            })
        );
        let back: IdentityLink = serde_json::from_value(json).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn test_wire_exactly_one_principal() {
        let both: Result<IdentityLink, _> = serde_json::from_value(serde_json::json!({
            "type": "assignee",
            "userId": "alice",
            "groupId": "sales",
            "scopeType": "task",
            "scopeId": "T-1"
        }));
        assert!(both.is_err());

        let neither: Result<IdentityLink, _> = serde_json::from_value(serde_json::json!({
            "type": "assignee",
            "scopeType": "task",
            "scopeId": "T-1"
        }));
        assert!(neither.is_err());
    }

    #[test]
    fn test_wire_blank_scope_id_rejected() {
        let result: Result<IdentityLink, _> = serde_json::from_value(serde_json::json!({
            "type": "assignee",
            "userId": "alice",
            "scopeType": "task",
            "scopeId": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_address_exclusivity() {
        let result: Result<IdentityLink, _> = serde_json::from_value(serde_json::json!({
            "type": "starter",
            "userId": "bob",
            "scopeType": "cmmnDefinition",
            "scopeId": "C-1",
            "scopeDefinitionId": "caseDef-3"
        }));
        assert!(result.is_err());
    }
}
