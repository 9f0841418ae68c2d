//! Shared building blocks for the table/view browser.
//!
//! Configuration, the error type, shared models, the front end's state
//! object and small utilities.

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod utils;
