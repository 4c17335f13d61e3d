//! Scope addresses — the uniform address shape shared by identity links.
//!
//! An address either points at a running instance (scope id, plus the
//! definition it was started from when known) or directly at a deployed
//! definition. The two interpretations are mutually exclusive and the scope
//! type alone determines which one applies, so the address is modeled as a
//! tagged variant rather than two optional id fields.

use crate::error::CaseError;
use crate::scope::ScopeType;
use serde::{Deserialize, Serialize};

/// Address of a scoped object: a running instance or a deployed definition.
///
/// Constructible only through [`ScopeAddress::instance`] or
/// [`ScopeAddress::definition`], which reject a scope type of the wrong kind
/// and blank ids; the inner variant is private, so no address can exist whose
/// tag kind disagrees with its shape. Serializes to the flat wire shape
/// `{scopeType, scopeId?, scopeDefinitionId?}` used by stored identity links;
/// deserializing a shape that sets a scope id on a definition tag (or omits
/// it on an instance tag) fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScopeAddressWire", into = "ScopeAddressWire")]
pub struct ScopeAddress {
    kind: AddressKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum AddressKind {
    /// A running instance, e.g. a case instance or a task.
    Instance {
        scope_type: ScopeType,
        scope_id: String,
        scope_definition_id: Option<String>,
    },
    /// A deployed definition, e.g. to gate who may start instances from it.
    Definition {
        scope_type: ScopeType,
        scope_definition_id: String,
    },
}

impl ScopeAddress {
    /// Address a running instance. Fails with
    /// [`CaseError::InvalidScopeType`] when `scope_type` is a definition tag
    /// or the id is blank.
    pub fn instance(
        scope_type: ScopeType,
        scope_id: impl Into<String>,
    ) -> Result<Self, CaseError> {
        if !scope_type.is_instance() {
            return Err(CaseError::InvalidScopeType(format!(
                "'{scope_type}' is a definition tag and cannot address an instance"
            )));
        }
        let scope_id = scope_id.into();
        if scope_id.trim().is_empty() {
            return Err(CaseError::InvalidScopeType(format!(
                "instance tag '{scope_type}' requires a non-blank scopeId"
            )));
        }
        Ok(Self {
            kind: AddressKind::Instance {
                scope_type,
                scope_id,
                scope_definition_id: None,
            },
        })
    }

    /// Address a deployed definition. Fails with
    /// [`CaseError::InvalidScopeType`] when `scope_type` is an instance tag
    /// or the id is blank.
    pub fn definition(
        scope_type: ScopeType,
        scope_definition_id: impl Into<String>,
    ) -> Result<Self, CaseError> {
        if !scope_type.is_definition() {
            return Err(CaseError::InvalidScopeType(format!(
                "'{scope_type}' is an instance tag and cannot address a definition"
            )));
        }
        let scope_definition_id = scope_definition_id.into();
        if scope_definition_id.trim().is_empty() {
            return Err(CaseError::InvalidScopeType(format!(
                "definition tag '{scope_type}' requires a non-blank scopeDefinitionId"
            )));
        }
        Ok(Self {
            kind: AddressKind::Definition {
                scope_type,
                scope_definition_id,
            },
        })
    }

    /// Attach (or replace) the definition id of an instance address.
    ///
    /// A definition address is left untouched: its primary identifier is
    /// fixed at construction.
    pub fn with_definition_id(mut self, definition_id: impl Into<String>) -> Self {
        if let AddressKind::Instance {
            scope_definition_id,
            ..
        } = &mut self.kind
        {
            *scope_definition_id = Some(definition_id.into());
        }
        self
    }

    pub fn scope_type(&self) -> ScopeType {
        match &self.kind {
            AddressKind::Instance { scope_type, .. } => *scope_type,
            AddressKind::Definition { scope_type, .. } => *scope_type,
        }
    }

    /// The id of the addressed instance, or `None` for a definition address.
    pub fn scope_id(&self) -> Option<&str> {
        match &self.kind {
            AddressKind::Instance { scope_id, .. } => Some(scope_id),
            AddressKind::Definition { .. } => None,
        }
    }

    /// The definition id: the instance's deployed definition (when known),
    /// or the primary id of a definition address.
    pub fn scope_definition_id(&self) -> Option<&str> {
        match &self.kind {
            AddressKind::Instance {
                scope_definition_id,
                ..
            } => scope_definition_id.as_deref(),
            AddressKind::Definition {
                scope_definition_id,
                ..
            } => Some(scope_definition_id),
        }
    }

    pub fn is_instance(&self) -> bool {
        matches!(self.kind, AddressKind::Instance { .. })
    }

    pub fn is_definition(&self) -> bool {
        matches!(self.kind, AddressKind::Definition { .. })
    }
}

/// Flat wire form of [`ScopeAddress`], matching the stored record layout.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScopeAddressWire {
    scope_type: ScopeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope_definition_id: Option<String>,
}

impl TryFrom<ScopeAddressWire> for ScopeAddress {
    type Error = CaseError;

    fn try_from(wire: ScopeAddressWire) -> Result<Self, Self::Error> {
        if wire.scope_type.is_definition() {
            if wire.scope_id.is_some() {
                return Err(CaseError::InvalidScopeType(format!(
                    "definition tag '{}' must not carry a scopeId",
                    wire.scope_type
                )));
            }
            let scope_definition_id = wire.scope_definition_id.ok_or_else(|| {
                CaseError::InvalidScopeType(format!(
                    "definition tag '{}' requires a scopeDefinitionId",
                    wire.scope_type
                ))
            })?;
            ScopeAddress::definition(wire.scope_type, scope_definition_id)
        } else {
            let scope_id = wire.scope_id.ok_or_else(|| {
                CaseError::InvalidScopeType(format!(
                    "instance tag '{}' requires a scopeId",
                    wire.scope_type
                ))
            })?;
            let address = ScopeAddress::instance(wire.scope_type, scope_id)?;
            Ok(match wire.scope_definition_id {
                Some(definition_id) => address.with_definition_id(definition_id),
                None => address,
            })
        }
    }
}

impl From<ScopeAddress> for ScopeAddressWire {
    fn from(address: ScopeAddress) -> Self {
        match address.kind {
            AddressKind::Instance {
                scope_type,
                scope_id,
                scope_definition_id,
            } => ScopeAddressWire {
                scope_type,
                scope_id: Some(scope_id),
                scope_definition_id,
            },
            AddressKind::Definition {
                scope_type,
                scope_definition_id,
            } => ScopeAddressWire {
                scope_type,
                scope_id: None,
                scope_definition_id: Some(scope_definition_id),
            },
        }
    }
}
