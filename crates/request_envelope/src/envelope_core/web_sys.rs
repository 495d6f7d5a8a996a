// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use bytes::Bytes;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::{Method, RawResponse};
use crate::error::RequestError;

impl From<wasm_bindgen::JsValue> for RequestError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        RequestError::Transport {
            detail: format!("{value:?}"),
        }
    }
}

/// Browser transport, backed by `fetch()`.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeCore;

impl EnvelopeCore {
    pub fn new() -> Self {
        Self
    }

    pub(crate) async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, RequestError> {
        let length = match &body {
            Some(b) => b.len() as u32,
            None => 0,
        };
        let body_array = js_sys::Uint8Array::new_with_length(length);
        let mut opts = RequestInit::new();
        let headers = Headers::new()?;
        opts.method(method.as_str());
        opts.mode(RequestMode::Cors);
        opts.credentials(RequestCredentials::Include);
        if let Some(b) = body {
            body_array.copy_from(&b);
            opts.body(Some(&body_array.buffer()));
            headers.set("Content-Type", "application/json")?;
        }
        opts.headers(&headers);
        let request = Request::new_with_str_and_init(url, &opts)?;

        let resp_value = match (
            js_sys::global().dyn_into::<web_sys::Window>(),
            js_sys::global().dyn_into::<web_sys::DedicatedWorkerGlobalScope>(),
        ) {
            (Ok(global), _) => JsFuture::from(global.fetch_with_request(&request)).await,
            (_, Ok(global)) => JsFuture::from(global.fetch_with_request(&request)).await,
            _ => panic!("No global object!"),
        }
        .map_err(|e| RequestError::Transport {
            detail: format!("fetch failed: {e:?}"),
        })?;

        assert!(resp_value.is_instance_of::<Response>());
        let resp: Response = resp_value.dyn_into().unwrap();

        // Body read failures are absorbed; the caller falls back to the
        // status line.
        let body = read_body(&resp).await.ok();

        Ok(RawResponse {
            status: resp.status(),
            status_text: resp.status_text(),
            body,
        })
    }
}

async fn read_body(resp: &Response) -> Result<Bytes, JsValue> {
    // Convert the body `Promise` into a rust `Future`.
    let buffer = JsFuture::from(resp.array_buffer()?).await?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(Bytes::from(array.to_vec()))
}
