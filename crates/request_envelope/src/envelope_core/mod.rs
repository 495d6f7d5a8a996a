// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg_attr(target_arch = "wasm32", path = "web_sys.rs")]
#[cfg_attr(not(target_arch = "wasm32"), path = "reqwest.rs")]
pub mod implementation;

use std::fmt;

use bytes::Bytes;

pub use self::implementation::EnvelopeCore as EnvelopeCoreImpl;
use crate::error::RequestError;

/// The HTTP verbs the portal call sites use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a transport core hands back: the status line, and the body if it
/// could be read. `body: None` means reading failed outright; callers treat
/// that the same as an empty body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Option<Bytes>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The error-message fallback when a failure response has no readable
    /// body: `"<status> <status_text>"`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.status_text)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait EnvelopeCore {
    /// Perform one HTTP exchange. A `Some` body is sent as
    /// `application/json`. Implementations only fail for transport-level
    /// problems; whatever status the server returns is reported in the
    /// `RawResponse` untouched, and classifying it is the envelope's job.
    async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, RequestError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl EnvelopeCore for EnvelopeCoreImpl {
    async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, RequestError> {
        self.perform(method, url, body).await
    }
}

pub mod test_utils {
    use super::*;

    use std::pin::Pin;

    type ResultFuture = dyn futures::Future<Output = Result<RawResponse, RequestError>> + Send;
    type Responder = dyn (Fn(Method, String, Option<Bytes>) -> Pin<Box<ResultFuture>>) + Send + Sync;

    /// Mock `EnvelopeCore` that holds a closure that can respond to requests with canned responses, or errors.
    ///
    /// ```rust
    /// use futures::FutureExt;
    ///
    /// use request_envelope::{RawResponse, RequestEnvelope, RequestError};
    /// use request_envelope::test_utils::EnvelopeCoreMock;
    ///
    /// let mock = EnvelopeCoreMock::from(|_method, url: String, _body| {
    ///     // note the `async move { ... }.boxed()`!
    ///     async move {
    ///         if url.contains("unplugged") {
    ///             Err(RequestError::Transport {
    ///                 detail: "connection refused".into(),
    ///             })
    ///         } else {
    ///             Ok(RawResponse {
    ///                 status: 200,
    ///                 status_text: "OK".into(),
    ///                 body: Some(r#"{"ready":true}"#.as_bytes().into()),
    ///             })
    ///         }
    ///     }
    ///     .boxed()
    /// });
    /// let envelope = RequestEnvelope::from(mock);
    ///
    /// // use the mocked envelope as desired
    /// let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    /// rt.block_on(async {
    ///     envelope.get_json("/api/status", "Status check failed").await.unwrap();
    ///     envelope.get_json("/api/unplugged", "Status check failed").await.unwrap_err();
    /// });
    /// ```
    pub struct EnvelopeCoreMock {
        responder: Box<Responder>,
    }

    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    impl EnvelopeCore for EnvelopeCoreMock {
        async fn perform(
            &self,
            method: Method,
            url: &str,
            body: Option<Bytes>,
        ) -> Result<RawResponse, RequestError> {
            (self.responder)(method, url.into(), body).await
        }
    }

    impl<F> From<F> for EnvelopeCoreMock
    where
        F: Fn(Method, String, Option<Bytes>) -> Pin<Box<ResultFuture>> + Send + Sync + 'static,
    {
        fn from(value: F) -> Self {
            Self {
                responder: Box::new(value),
            }
        }
    }
}
