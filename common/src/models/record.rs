//! Record and filter models.
//!
//! Rows travel as untyped JSON objects since the set of tables is only
//! known to the backend.

use std::collections::BTreeMap;

/// A single row, keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Column filters for row listings. Empty values mean "no filter".
pub type Filters = BTreeMap<String, String>;
