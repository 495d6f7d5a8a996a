// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site helpers for the portal's JSON API: contact-form submission and
//! API key management, all funneled through one [`RequestEnvelope`].

pub mod apikeys;
pub mod contact;
pub mod endpoints;

#[cfg(test)]
mod test_support;

pub use apikeys::{ApiKey, ApiKeyRequest};
pub use contact::ContactForm;
pub use endpoints::Endpoints;

use request_envelope::RequestEnvelope;

/// One client per portal: the envelope that carries the requests, plus where
/// to send them. The operations themselves live in [`contact`] and
/// [`apikeys`].
#[derive(Debug, Clone)]
pub struct PortalClient {
    envelope: RequestEnvelope,
    endpoints: Endpoints,
}

impl PortalClient {
    /// A client over the platform transport, with endpoints resolved from
    /// the environment.
    pub fn new() -> Self {
        Self::with_envelope(RequestEnvelope::new(), Endpoints::from_env())
    }

    pub fn with_envelope(envelope: RequestEnvelope, endpoints: Endpoints) -> Self {
        Self {
            envelope,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for PortalClient {
    fn default() -> Self {
        Self::new()
    }
}
