//! Shared data models.

pub mod record;
pub mod resource;

// Re-export commonly used types
pub use record::{Filters, Record};
pub use resource::ResourceKind;
