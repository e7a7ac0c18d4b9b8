use gloo_net::http::Request;

use crate::api_client::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// `fetch` through gloo-net. The returned future resolves once the response
/// head is in, which is when `on_headers` fires; the body is read after.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(
        &self,
        request: HttpRequest,
        on_headers: &mut dyn FnMut(u16),
    ) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let pending = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = pending.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        on_headers(status);

        let body = response
            .binary()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
