//! Well-known identity-link permission types.
//!
//! The permission-type vocabulary is open: engines and applications may
//! introduce their own tags. These are the ones used across the platform.

/// The principal is the assignee of a task.
pub const ASSIGNEE: &str = "assignee";
/// The principal is a candidate for claiming a task.
pub const CANDIDATE: &str = "candidate";
/// The principal owns the scoped object.
pub const OWNER: &str = "owner";
/// The principal started the instance.
pub const STARTER: &str = "starter";
/// The principal participates in the scoped object.
pub const PARTICIPANT: &str = "participant";
/// The principal reactivated a historic case instance.
pub const REACTIVATOR: &str = "reactivator";
