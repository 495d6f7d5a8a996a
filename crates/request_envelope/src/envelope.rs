// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::{json, Value};
use tracing::debug;

use crate::envelope_core::{EnvelopeCore, EnvelopeCoreImpl, Method, RawResponse};
use crate::error::RequestError;

/// The stand-in value returned for successful responses whose body is empty
/// or not JSON: `{"success": true}`.
pub fn success_sentinel() -> Value {
    json!({ "success": true })
}

/// A JSON request/response envelope, wrapping the underlying `EnvelopeCore`
/// implementation (either reqwest or web-sys, depending on platform).
///
/// Every exchange goes through the same pipeline: perform the request, split
/// success from failure on the status class, decode a success body to JSON
/// (or the [`success_sentinel`]), and reduce a failure to a labelled,
/// human-readable [`RequestError`].
#[derive(Clone)]
pub struct RequestEnvelope {
    // usually an EnvelopeCoreImpl; swappable for mocking and layering
    core: Arc<dyn EnvelopeCore + Send + Sync>,
}

impl RequestEnvelope {
    pub fn new() -> Self {
        EnvelopeCoreImpl::new().into()
    }

    /// Serialize `payload` and POST it to `url` as JSON.
    ///
    /// `label` prefixes the error message of failure responses, e.g.
    /// `"Contact request failed"`.
    pub async fn post_json<P: serde::Serialize>(
        &self,
        url: &str,
        payload: &P,
        label: &str,
    ) -> Result<Value, RequestError> {
        let body = serde_json::to_vec(payload).map_err(RequestError::transport)?;
        self.send(Method::Post, url, Some(body.into()), label).await
    }

    /// GET `url`, decoding the response like [`post_json`](Self::post_json).
    pub async fn get_json(&self, url: &str, label: &str) -> Result<Value, RequestError> {
        self.send(Method::Get, url, None, label).await
    }

    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
        label: &str,
    ) -> Result<Value, RequestError> {
        let response = self.core.perform(method, url, body).await?;
        if response.is_success() {
            Ok(decode_success_body(&response))
        } else {
            Err(RequestError::Api {
                status: response.status,
                detail: format!("{label}: {}", extract_error_message(&response)),
            })
        }
    }
}

impl<Core: EnvelopeCore + Send + Sync + 'static> From<Core> for RequestEnvelope {
    fn from(core: Core) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

impl Default for RequestEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestEnvelope").finish_non_exhaustive()
    }
}

fn decode_success_body(response: &RawResponse) -> Value {
    match &response.body {
        Some(bytes) => serde_json::from_slice(bytes).unwrap_or_else(|_| success_sentinel()),
        None => success_sentinel(),
    }
}

/// Reduce a failure response to a human-readable message.
///
/// Precedence: a non-empty string `message` field in a JSON body, then the
/// whole JSON body re-serialized compactly, then the raw body text, then the
/// `"<status> <status_text>"` line.
fn extract_error_message(response: &RawResponse) -> String {
    let text = match &response.body {
        Some(bytes) if !bytes.is_empty() => String::from_utf8_lossy(bytes).into_owned(),
        _ => return response.status_line(),
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(decoded) => {
            // An empty `message` doesn't count.
            let message = decoded
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty());
            match message {
                Some(message) => message.to_owned(),
                None => serde_json::to_string(&decoded).unwrap_or(text),
            }
        }
        Err(_) => text,
    }
}

/// An `EnvelopeCore` that joins relative urls onto a fixed base before
/// handing them to the wrapped core.
///
/// Browser deployments resolve `/api/...` against the page origin; native
/// callers have no ambient origin, so this layer supplies one. Absolute urls
/// pass through untouched.
pub struct BaseUrlRewriter {
    base: String,
    inner: Arc<dyn EnvelopeCore + Send + Sync>,
}

impl BaseUrlRewriter {
    /// Wrap the envelope's current core in a rewriter for `base`.
    pub fn inject(envelope: RequestEnvelope, base: impl Into<String>) -> RequestEnvelope {
        let RequestEnvelope { core } = envelope;
        Self {
            base: base.into(),
            inner: core,
        }
        .into()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl EnvelopeCore for BaseUrlRewriter {
    async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, RequestError> {
        let target = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            let target = format!(
                "{}/{}",
                self.base.trim_end_matches('/'),
                url.trim_start_matches('/')
            );
            debug!("request_envelope: rewrote {url} to {target}");
            target
        };
        self.inner.perform(method, &target, body).await
    }
}
