//! Role-scoped read and transactional write services
//!
//! One module per resource. Every multi-row mutation runs inside a single
//! transaction except admin bulk-assign, which is deliberately per-target.

pub mod assign;
pub mod auth;
pub mod documents;
pub mod events;
pub mod groups;
pub mod lookups;
pub mod reports;
pub mod students;
pub mod users;
