//! Core domain logic for the campus events backend
//!
//! Everything role-sensitive lives here: the access scope resolver, the
//! transactional write services, the event status guard and the two
//! background reconciliation sweeps. The HTTP layer in `campus-api` is a
//! thin translation on top of these functions.

pub mod blob;
pub mod error;
pub mod pagination;
pub mod reconciler;
pub mod scope;
pub mod services;
pub mod status;

pub use error::{CoreError, FieldError};
pub use pagination::{Page, PageParams};
pub use scope::{Principal, Scope};
