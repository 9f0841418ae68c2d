//! Front-end state shared between views.
//!
//! Each field is an independent observable cell. Writers replace the whole
//! value; readers either sample it or subscribe for changes. Cells are not
//! coordinated with each other and the last write wins.

use tokio::sync::watch;

use crate::config::{AppConfig, DEFAULT_API_URL, DEFAULT_SCHEMA};

/// Table selected before the user picks one.
pub const DEFAULT_TABLE: &str = "some-table";
/// Tab selected before the user picks one.
pub const DEFAULT_TAB: &str = "some-tab";
/// View selected before the user picks one.
pub const DEFAULT_VIEW: &str = "some-view";

/// An observable string value.
#[derive(Debug)]
pub struct StateCell {
    tx: watch::Sender<String>,
}

impl StateCell {
    /// Creates a cell holding `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: impl Into<String>) {
        self.tx.send_replace(value.into());
    }

    /// Returns a receiver that observes future writes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

/// State owned by the browser shell and lent to the views that need it.
#[derive(Debug)]
pub struct HubState {
    pub api_url: StateCell,
    pub current_schema: StateCell,
    pub current_table: StateCell,
    pub current_tab: StateCell,
    pub current_view: StateCell,
}

impl Default for HubState {
    fn default() -> Self {
        Self {
            api_url: StateCell::new(DEFAULT_API_URL),
            current_schema: StateCell::new(DEFAULT_SCHEMA),
            current_table: StateCell::new(DEFAULT_TABLE),
            current_tab: StateCell::new(DEFAULT_TAB),
            current_view: StateCell::new(DEFAULT_VIEW),
        }
    }
}

impl HubState {
    /// Creates state seeded with the configured backend and schema.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_url: StateCell::new(config.api_url.clone()),
            current_schema: StateCell::new(config.schema.clone()),
            ..Default::default()
        }
    }
}
