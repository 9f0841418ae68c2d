//! Data-access layer for the table/view browser.
//!
//! Builds backend URLs, performs JSON requests and exposes the read and
//! mutation operations the browser views call.

pub mod request;
pub mod service;
pub mod url;

pub use request::ApiRequest;
pub use service::{DataService, DataSource};
