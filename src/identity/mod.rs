//! Identity links — permission grants over scoped instances and definitions.
//!
//! - [`IdentityLink`] — A grant record: permission type, principal, address.
//! - [`link_types`] — Well-known permission-type tags.
//! - [`IdentityLinkStore`] — Contract for the external store owning link
//!   lifecycle, with an in-memory reference implementation.

pub mod link;
pub mod link_types;
pub mod store;

pub use link::{IdentityLink, Principal};
pub use store::{IdentityLinkStore, InMemoryIdentityLinkStore};
