// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use bytes::Bytes;
use tracing::debug;

use super::{Method, RawResponse};
use crate::error::RequestError;

/// Native transport, backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeCore {
    client: reqwest::Client, // cheaply cloneable, Arc inside
}

impl EnvelopeCore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub(crate) async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, RequestError> {
        let mut rb = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(b) = body {
            rb = rb
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(b);
        }

        debug!("request_envelope: {method} {url}");

        let response = rb.send().await.map_err(RequestError::transport)?;

        let status = response.status();
        debug!("request_envelope: response from {url}: {status}");

        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                // Absorbed: the caller falls back to the status line. Keep
                // the read error visible in the logs at least.
                debug!("request_envelope: failed reading body from {url}: {err}");
                None
            }
        };

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
