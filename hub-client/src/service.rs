//! Resource operations against the backend.
//!
//! Reads come in two forms. The `DataSource` methods return the result and
//! let the caller decide where it lands. The `fetch_*` functions deliver it
//! to a sink and only log failures, so the sink is simply never called when
//! the request fails.
//!
//! Mutations return their error to the caller; the request layer has
//! already logged it.
//! Existing views depend on the silent sink reads; check them before
//! making the two paths behave the same.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::watch;

use common::config::AppConfig;
use common::errors::AppResult;
use common::models::{Record, ResourceKind};
use common::state::HubState;

use crate::request::ApiRequest;
use crate::url::{build_url, join_path, normalize_resource_name, resource_path};

/// Operations exposed by the table/view backend.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Lists table names.
    async fn tables(&self) -> AppResult<Vec<String>>;

    /// Lists view names.
    async fn views(&self) -> AppResult<Vec<String>>;

    /// Lists the columns of a table.
    async fn columns(&self, table: &str) -> AppResult<Vec<String>>;

    /// Lists the columns of a view.
    async fn view_columns(&self, view: &str) -> AppResult<Vec<String>>;

    /// Lists rows of a table or view matching `filters`.
    ///
    /// Filters with an empty value are ignored.
    async fn rows(
        &self,
        kind: ResourceKind,
        name: &str,
        filters: &[(String, String)],
    ) -> AppResult<Vec<Record>>;

    /// Calls a backend function with a single path argument.
    async fn call_function(&self, function: &str, argument: &str)
        -> AppResult<serde_json::Value>;

    /// Inserts a record and returns it as stored.
    async fn create(&self, table: &str, record: &Record) -> AppResult<Record>;

    /// Updates the record identified by `field = value`.
    async fn update(
        &self,
        table: &str,
        field: &str,
        value: &str,
        changes: &Record,
    ) -> AppResult<Record>;

    /// Deletes the record identified by `field = value`.
    async fn delete(&self, table: &str, field: &str, value: &str) -> AppResult<()>;
}

/// Where the backend base address comes from.
#[derive(Debug, Clone)]
enum BaseUrl {
    Fixed(Arc<str>),
    /// Follows the browser's `api_url` cell; read on every request.
    Shared(watch::Receiver<String>),
}

/// HTTP implementation of [`DataSource`].
#[derive(Debug, Clone)]
pub struct DataService {
    base_url: BaseUrl,
    http_client: reqwest::Client,
}

/// Builds the HTTP client described by `config`.
///
/// # Errors
/// Returns `AppError::Request` if the HTTP client cannot be built.
pub fn build_http_client(config: &AppConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

impl DataService {
    /// Creates a service for the backend at `api_url`.
    pub fn new(api_url: impl AsRef<str>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: BaseUrl::Fixed(Arc::from(api_url.as_ref().trim_end_matches('/'))),
            http_client,
        }
    }

    /// Creates a service that targets whatever `state.api_url` holds at
    /// the time of each request.
    pub fn from_state(state: &HubState, http_client: reqwest::Client) -> Self {
        Self {
            base_url: BaseUrl::Shared(state.api_url.subscribe()),
            http_client,
        }
    }

    /// Returns the current backend base address.
    pub fn api_url(&self) -> String {
        match &self.base_url {
            BaseUrl::Fixed(url) => url.to_string(),
            BaseUrl::Shared(rx) => rx.borrow().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_path(&self.api_url(), path)
    }

    fn record_url(&self, table: &str, field: &str, value: &str) -> String {
        self.url(&format!(
            "{}/{field}={value}",
            normalize_resource_name(table)
        ))
    }
}

#[async_trait]
impl DataSource for DataService {
    async fn tables(&self) -> AppResult<Vec<String>> {
        ApiRequest::get(self.url("tables"))
            .send(&self.http_client)
            .await
    }

    async fn views(&self) -> AppResult<Vec<String>> {
        ApiRequest::get(self.url("views"))
            .send(&self.http_client)
            .await
    }

    async fn columns(&self, table: &str) -> AppResult<Vec<String>> {
        let path = format!("{}/columns", resource_path(ResourceKind::Table, table));
        ApiRequest::get(self.url(&path))
            .send(&self.http_client)
            .await
    }

    async fn view_columns(&self, view: &str) -> AppResult<Vec<String>> {
        let path = format!("{}/columns", resource_path(ResourceKind::View, view));
        ApiRequest::get(self.url(&path))
            .send(&self.http_client)
            .await
    }

    async fn rows(
        &self,
        kind: ResourceKind,
        name: &str,
        filters: &[(String, String)],
    ) -> AppResult<Vec<Record>> {
        let url = build_url(&self.url(&resource_path(kind, name)), filters.iter().cloned());
        let rows: Vec<Record> = ApiRequest::get(url).send(&self.http_client).await?;
        tracing::debug!(kind = %kind, name = %name, count = rows.len(), "已获取行数据");
        Ok(rows)
    }

    async fn call_function(
        &self,
        function: &str,
        argument: &str,
    ) -> AppResult<serde_json::Value> {
        ApiRequest::get(self.url(&format!("{function}/{argument}")))
            .send(&self.http_client)
            .await
    }

    async fn create(&self, table: &str, record: &Record) -> AppResult<Record> {
        let url = self.url(&normalize_resource_name(table));
        let created = ApiRequest::new(Method::POST, url)
            .json(record)?
            .send(&self.http_client)
            .await?;
        tracing::info!(table = %table, "记录已创建");
        Ok(created)
    }

    async fn update(
        &self,
        table: &str,
        field: &str,
        value: &str,
        changes: &Record,
    ) -> AppResult<Record> {
        let updated = ApiRequest::new(Method::PUT, self.record_url(table, field, value))
            .json(changes)?
            .send(&self.http_client)
            .await?;
        tracing::info!(table = %table, field = %field, value = %value, "记录已更新");
        Ok(updated)
    }

    async fn delete(&self, table: &str, field: &str, value: &str) -> AppResult<()> {
        ApiRequest::new(Method::DELETE, self.record_url(table, field, value))
            .send_unit(&self.http_client)
            .await?;
        tracing::info!(table = %table, field = %field, value = %value, "记录已删除");
        Ok(())
    }
}

/// Delivers the table list to `sink`. Failures are logged, not returned.
pub async fn fetch_tables<S, F>(source: &S, sink: F)
where
    S: DataSource + ?Sized,
    F: FnOnce(Vec<String>),
{
    match source.tables().await {
        Ok(tables) => sink(tables),
        Err(e) => tracing::error!(error = %e, "Failed to fetch tables"),
    }
}

/// Delivers the view list to `sink`. Failures are logged, not returned.
pub async fn fetch_views<S, F>(source: &S, sink: F)
where
    S: DataSource + ?Sized,
    F: FnOnce(Vec<String>),
{
    match source.views().await {
        Ok(views) => sink(views),
        Err(e) => tracing::error!(error = %e, "Failed to fetch views"),
    }
}

/// Delivers a table's columns to `sink`. Failures are logged, not returned.
pub async fn fetch_columns<S, F>(source: &S, table: &str, sink: F)
where
    S: DataSource + ?Sized,
    F: FnOnce(Vec<String>),
{
    match source.columns(table).await {
        Ok(columns) => sink(columns),
        Err(e) => tracing::error!(table = %table, error = %e, "Failed to fetch columns"),
    }
}

/// Delivers the rows of a table or view to `sink`. Failures are logged, not returned.
pub async fn fetch_rows<S, I, K, V, F>(
    source: &S,
    name: &str,
    filters: I,
    sink: F,
    kind: ResourceKind,
) where
    S: DataSource + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
    F: FnOnce(Vec<Record>),
{
    let filters: Vec<(String, String)> = filters
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    match source.rows(kind, name, &filters).await {
        Ok(rows) => {
            tracing::info!(kind = %kind, name = %name, count = rows.len(), "Rows fetched");
            sink(rows);
        }
        Err(e) => {
            tracing::error!(kind = %kind, name = %name, error = %e, "Failed to fetch rows")
        }
    }
}

/// [`fetch_rows`] for a table.
pub async fn fetch_table_rows<S, I, K, V, F>(source: &S, table: &str, filters: I, sink: F)
where
    S: DataSource + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
    F: FnOnce(Vec<Record>),
{
    fetch_rows(source, table, filters, sink, ResourceKind::Table).await
}

/// [`fetch_rows`] for a view.
pub async fn fetch_view_rows<S, I, K, V, F>(source: &S, view: &str, filters: I, sink: F)
where
    S: DataSource + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
    F: FnOnce(Vec<Record>),
{
    fetch_rows(source, view, filters, sink, ResourceKind::View).await
}
