//! Error types for the contract layer.
//!
//! - [`CaseError`] — Conditions raised by the builder, the scope/identity
//!   validation paths, and engine rejections.
//! - [`EngineError`] — Opaque failure reported by an external collaborator
//!   (case engine, form service, identity-link store).

pub mod case_error;
pub mod engine_error;

pub use case_error::CaseError;
pub use engine_error::EngineError;

/// Convenience alias for contract-layer results.
pub type CaseResult<T> = Result<T, CaseError>;
