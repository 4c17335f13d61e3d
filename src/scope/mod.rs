//! Scope addressing — the uniform way identity links and start requests refer
//! to one of several engine domains.
//!
//! - [`ScopeType`] — Closed catalog of scope tags (instance and definition).
//! - [`ScopeAddress`] — Tagged address over a running instance or a startable
//!   definition.

pub mod address;
pub mod scope_type;

pub use address::ScopeAddress;
pub use scope_type::ScopeType;
