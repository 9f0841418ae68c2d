//! Utility functions and helpers.

pub mod id_generator;
pub mod name_format;

// Re-export commonly used types
pub use id_generator::IdGenerator;
pub use name_format::snake_to_camel_with_spaces;
