pub mod dashboard;
pub mod forecast;
pub mod report;

use common::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DashboardError, Result};

/// Shown when no response arrived at all.
pub const NETWORK_ERROR: &str = "could not reach server";
/// Shown for a non-success status without a usable `detail`.
pub const REQUEST_FAILED: &str = "request failed";
/// Shown when a success body does not decode into the expected shape.
pub const UNEXPECTED_RESPONSE: &str = "unexpected response from server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as handed to the transport. Query pairs are kept unencoded;
/// encoding is the transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below HTTP: refused connection, DNS, CORS rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

/// The HTTP layer under [`ApiClient`].
///
/// `on_headers` is called with the status code as soon as the response head
/// arrives, before the body is read.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(
        &self,
        request: HttpRequest,
        on_headers: &mut dyn FnMut(u16),
    ) -> std::result::Result<HttpResponse, TransportError>;
}

/// Client for the external forecasting/reporting API.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/v1{}", self.base_url, endpoint)
    }

    /// Common GET request handler
    pub async fn get<R>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(endpoint),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            body: None,
        };
        log::debug!("GET request to: {}", request.url);

        let response = self.send(request, &mut |_: u16| {}).await?;

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = serde_json::from_slice(&response.body).map_err(|e| {
            log::error!("GET {} - Failed to parse response: {}", endpoint, e);
            DashboardError::remote(UNEXPECTED_RESPONSE)
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(data)
    }

    /// POST a JSON body and return the raw response bytes.
    pub async fn post_for_bytes<B>(
        &self,
        endpoint: &str,
        body: &B,
        on_headers: &mut dyn FnMut(u16),
    ) -> Result<Vec<u8>>
    where
        B: Serialize,
    {
        let body = serde_json::to_string(body).map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            DashboardError::validation(format!("Failed to serialize request: {}", e))
        })?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(endpoint),
            query: Vec::new(),
            body: Some(body),
        };
        log::debug!("POST request to: {}", request.url);

        let response = self.send(request, on_headers).await?;

        log::info!("POST {} - Success ({} bytes)", endpoint, response.body.len());
        Ok(response.body)
    }

    async fn send(&self, request: HttpRequest, on_headers: &mut dyn FnMut(u16)) -> Result<HttpResponse> {
        let url = request.url.clone();

        let response = self.transport.send(request, on_headers).await.map_err(|e| {
            log::error!("{} - Request failed: {}", url, e.0);
            DashboardError::remote(NETWORK_ERROR)
        })?;

        if !response.ok() {
            log::warn!("{} - Non-OK response: {}", url, response.status);
            let error = error_from_response(&response);
            log::error!("{} - API error: {}", url, error);
            return Err(error);
        }

        Ok(response)
    }
}

/// Normalize a non-success response into a single error shape.
fn error_from_response(response: &HttpResponse) -> DashboardError {
    serde_json::from_slice::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .map(DashboardError::Remote)
        .unwrap_or_else(|| DashboardError::remote(REQUEST_FAILED))
}
