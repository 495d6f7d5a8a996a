// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared mock plumbing for the operation tests.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures::FutureExt;

use request_envelope::test_utils::EnvelopeCoreMock;
use request_envelope::{Method, RawResponse, RequestEnvelope};

use crate::{Endpoints, PortalClient};

pub type RequestLog = Arc<Mutex<Vec<(Method, String, Option<Bytes>)>>>;

/// A client whose envelope records every request and answers with the given
/// canned response.
pub fn mock_client(
    status: u16,
    status_text: &str,
    body: Option<&str>,
) -> (PortalClient, RequestLog) {
    let log: RequestLog = Arc::default();
    let seen = Arc::clone(&log);
    let status_text = status_text.to_owned();
    let body = body.map(|b| Bytes::copy_from_slice(b.as_bytes()));
    let mock = EnvelopeCoreMock::from(move |method, url: String, request_body| {
        seen.lock().unwrap().push((method, url, request_body));
        let response = RawResponse {
            status,
            status_text: status_text.clone(),
            body: body.clone(),
        };
        async move { Ok(response) }.boxed()
    });
    let client = PortalClient::with_envelope(RequestEnvelope::from(mock), Endpoints::default());
    (client, log)
}
