//! Request ID generator.
//!
//! Outgoing requests carry an ID so backend logs can be matched to
//! client log lines.

use uuid::Uuid;

/// Header name carrying the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates unique identifiers.
pub struct IdGenerator;

impl IdGenerator {
    /// Generates a unique request ID.
    ///
    /// # Returns
    /// A unique UUID string.
    pub fn request_id() -> String {
        Uuid::new_v4().to_string()
    }
}
