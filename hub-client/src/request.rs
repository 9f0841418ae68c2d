//! Generic JSON request execution.
//!
//! Every request defaults to `Content-Type: application/json` and carries a
//! fresh `x-request-id`. A non-2xx status is an error regardless of the
//! body. Failures are logged here and handed back unchanged; nothing is
//! retried.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::errors::{AppError, AppResult};
use common::utils::id_generator::{IdGenerator, REQUEST_ID_HEADER};

/// A single request to the backend.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a request with the given method.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Adds a header. Later values win, including over the defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    /// Returns `AppError::Serialize` if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> AppResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Sends the request and decodes the JSON response body as `T`.
    pub async fn send<T: DeserializeOwned>(self, client: &reqwest::Client) -> AppResult<T> {
        let url = self.url.clone();
        let result = match self.execute(client).await {
            Ok(response) => response.json::<T>().await.map_err(AppError::from),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| tracing::error!(url = %url, error = %e, "API request error"))
    }

    /// Sends the request and discards the response body.
    pub async fn send_unit(self, client: &reqwest::Client) -> AppResult<()> {
        let url = self.url.clone();
        self.execute(client)
            .await
            .map(|_| ())
            .inspect_err(|e| tracing::error!(url = %url, error = %e, "API request error"))
    }

    async fn execute(self, client: &reqwest::Client) -> AppResult<reqwest::Response> {
        let request_id = IdGenerator::request_id();
        let headers = self.header_map(&request_id)?;

        tracing::info!(
            method = %self.method,
            url = %self.url,
            request_id = %request_id,
            "Request URL"
        );

        let mut req = client.request(self.method, &self.url).headers(headers);
        if let Some(body) = self.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status.as_u16()));
        }
        Ok(response)
    }

    fn header_map(&self, request_id: &str) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_str(request_id)
                .map_err(|e| AppError::InvalidHeader(e.to_string()))?,
        );

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| AppError::InvalidHeader(format!("{name}: {value}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = ApiRequest::get("http://h/tables").header_map("abc").unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[REQUEST_ID_HEADER], "abc");
    }

    #[test]
    fn test_caller_header_overrides_content_type() {
        let headers = ApiRequest::get("http://h/tables")
            .header("Content-Type", "text/plain")
            .header("x-trace", "1")
            .header_map("abc")
            .unwrap();
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(headers["x-trace"], "1");
    }

    #[test]
    fn test_invalid_header_name() {
        let err = ApiRequest::get("http://h/tables")
            .header("bad header", "1")
            .header_map("abc")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidHeader(_)));
    }

    #[test]
    fn test_json_body_is_encoded() {
        let req = ApiRequest::new(Method::POST, "http://h/users")
            .json(&serde_json::json!({"name": "Ann"}))
            .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body.as_deref(), Some(br#"{"name":"Ann"}"#.as_slice()));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        let client = reqwest::Client::new();
        // port 9 (discard) is not expected to accept HTTP
        let err = ApiRequest::get("http://127.0.0.1:9/tables")
            .send::<Vec<String>>(&client)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Request(_)));
    }
}
