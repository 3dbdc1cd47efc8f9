//! The shared `ApiClient` every resource client dispatches through.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use stacks_kernel::settings::BackendSettings;

use crate::error::{ApiError, Result};

/// Response envelope used by every backend endpoint.
///
/// `data` is kept as a raw value until the code check passes, so error
/// envelopes (which carry `data: null`) never fail payload deserialization.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// HTTP client for the `/api/v1` REST backend.
///
/// Constructed once at application start and shared by reference with every
/// resource client. Holds no mutable state; cloning is cheap (the inner
/// `reqwest::Client` is an `Arc`). All calls use the single fixed timeout
/// from [`BackendSettings`]; there is no retry or request coalescing — one
/// invocation issues exactly one HTTP request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from backend settings.
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// GET with query parameters; `None` fields are omitted from the query.
    pub async fn get_with<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.http.get(self.url(path)).query(query))
            .await
    }

    /// POST a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.execute(self.http.post(self.url(path)).json(body))
            .await
    }

    /// PUT a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    /// DELETE without a body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.delete(self.url(path))).await
    }

    /// DELETE with a JSON body (the session book-removal endpoint).
    pub async fn delete_with<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.http.delete(self.url(path)).json(body))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Dispatch a request and interpret the response envelope.
    ///
    /// Envelope `code == 200` resolves to the unwrapped `data` payload;
    /// any other code becomes [`ApiError::Api`]. A non-2xx response whose
    /// body is not an envelope surfaces as the underlying transport error.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching backend request");

        let response = self.http.execute(request).await?;
        let http_error = response.error_for_status_ref().map(|_| ()).err();
        let body = response.bytes().await?;

        match serde_json::from_slice::<Envelope>(&body) {
            Ok(envelope) if envelope.code == 200 => {
                serde_json::from_value(envelope.data).map_err(ApiError::Decode)
            }
            Ok(envelope) => Err(ApiError::api(envelope.code, envelope.message)),
            Err(decode) => match http_error {
                Some(transport) => Err(ApiError::Transport(transport)),
                None => Err(ApiError::Decode(decode)),
            },
        }
    }
}
