// ============================================================================
// HTTP - request/response values and the transport seam (gloo-net on wasm)
// ============================================================================

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use crate::errors::{ClientError, ClientResult};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Set a header, replacing any existing value (names compare case-insensitively)
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Serialize `value` as the body and mark it as JSON
    pub fn json<T: Serialize>(self, value: &T) -> ClientResult<Self> {
        let body = serde_json::to_string(value)
            .map_err(|e| ClientError::Parse(format!("Serialization error: {}", e)))?;
        let mut request = self.header(CONTENT_TYPE, APPLICATION_JSON);
        request.body = Some(body);
        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(ClientError::from)
    }
}

/// Sends one request; `Err` only for transport failures, any status is `Ok`
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}

#[cfg(target_arch = "wasm32")]
pub use web::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod web {
    use async_trait::async_trait;
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};
    use super::{HttpRequest, HttpResponse, HttpTransport, Method};
    use crate::errors::{ClientError, ClientResult};

    /// `fetch` through gloo-net
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl HttpTransport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
            let method = match request.method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
                Method::Delete => GlooMethod::DELETE,
            };

            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ClientError::Transport(format!("Request build error: {}", e)))?;

            let response = built
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;

            let status = response.status();
            // A body that cannot be read is treated as empty; callers only ever parse it leniently
            let body = response.text().await.unwrap_or_default();

            Ok(HttpResponse { status, body })
        }
    }
}
