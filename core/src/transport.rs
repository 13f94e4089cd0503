//! Executes an `HttpRequest` and buffers the response.
//!
//! # Design
//! `Transport` is the only seam that touches the network. The default
//! `UreqTransport` is blocking: `dispatch` returns once the whole body has
//! been read. Non-2xx statuses come back as data so the classifier, not the
//! HTTP stack, decides what counts as failure. Every lower-level error is
//! wrapped into `ApiError::Transport`.

use std::time::Duration;

use ureq::{Agent, RequestBuilder};

use crate::error::{ApiError, Result};
use crate::http::{status_line, HttpMethod, HttpRequest, HttpResponse};

/// Timeout applied to the whole exchange when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues a single raw exchange.
pub trait Transport: Send + Sync {
    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.url.as_str();
        let body = request.body.as_deref();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), &request.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), &request.headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(url), &request.headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Patch => {
                let builder = with_headers(self.agent.patch(url), &request.headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(ApiError::transport)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(ApiError::transport)?;

        Ok(HttpResponse {
            status,
            status_text: status_line(status),
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
