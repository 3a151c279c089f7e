//! HTTP handlers, one module per resource
//!
//! Handlers translate between wire DTOs and the core services; every
//! authorization decision happens below this layer.

pub mod admin;
pub mod auth;
pub mod documents;
pub mod events;
pub mod groups;
pub mod lookups;
pub mod media;
pub mod reports;
pub mod students;
pub mod system;
pub mod users;

pub use admin::*;
pub use auth::*;
pub use documents::*;
pub use events::*;
pub use groups::*;
pub use lookups::*;
pub use media::*;
pub use reports::*;
pub use students::*;
pub use system::*;
pub use users::*;
