//! Identity-link store contract.
//!
//! Links are created when a permission is granted and destroyed when the
//! grant is revoked or the owning scoped object goes away. The store is an
//! external collaborator; no ordering guarantee holds between two writes
//! unless the backing store provides one.

use crate::error::EngineError;
use crate::identity::IdentityLink;
use crate::scope::ScopeAddress;
use async_trait::async_trait;
use parking_lot::RwLock;

/// External store owning identity-link lifecycle.
#[async_trait]
pub trait IdentityLinkStore: Send + Sync {
    /// Persist a grant.
    async fn grant(&self, link: IdentityLink) -> Result<(), EngineError>;

    /// Revoke a grant. Revoking a link that is not present is a no-op.
    async fn revoke(&self, link: &IdentityLink) -> Result<(), EngineError>;

    /// All links addressing the given scope.
    async fn find_by_address(
        &self,
        address: &ScopeAddress,
    ) -> Result<Vec<IdentityLink>, EngineError>;
}

/// In-memory store, used in tests and as a reference for embedders.
#[derive(Default)]
pub struct InMemoryIdentityLinkStore {
    links: RwLock<Vec<IdentityLink>>,
}

impl InMemoryIdentityLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }
}

#[async_trait]
impl IdentityLinkStore for InMemoryIdentityLinkStore {
    async fn grant(&self, link: IdentityLink) -> Result<(), EngineError> {
        let mut links = self.links.write();
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn revoke(&self, link: &IdentityLink) -> Result<(), EngineError> {
        self.links.write().retain(|l| l != link);
        Ok(())
    }

    async fn find_by_address(
        &self,
        address: &ScopeAddress,
    ) -> Result<Vec<IdentityLink>, EngineError> {
        Ok(self
            .links
            .read()
            .iter()
            .filter(|l| l.address() == address)
            .cloned()
            .collect())
    }
}
