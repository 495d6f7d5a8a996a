// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod envelope;
pub mod envelope_core;
pub mod error;

pub use envelope::{success_sentinel, BaseUrlRewriter, RequestEnvelope};
pub use envelope_core::{test_utils, EnvelopeCore, Method, RawResponse};
pub use error::RequestError;
