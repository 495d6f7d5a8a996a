// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

pub const CONTACT_ENDPOINT_ENV_VAR: &str = "SECUREDNA_PORTAL_CONTACT_ENDPOINT";
pub const KEYS_ENDPOINT_ENV_VAR: &str = "SECUREDNA_PORTAL_KEYS_ENDPOINT";

pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const DEFAULT_KEYS_ENDPOINT: &str = "/api/keys";

/// Where the portal's operations live. Resolved once at client construction,
/// not re-read per call.
///
/// The defaults are relative paths: in the browser they resolve against the
/// page origin, and native callers layer a
/// [`BaseUrlRewriter`](request_envelope::BaseUrlRewriter) underneath to
/// supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub contact: String,
    pub keys: String,
}

impl Endpoints {
    /// Endpoint paths from [`CONTACT_ENDPOINT_ENV_VAR`] and
    /// [`KEYS_ENDPOINT_ENV_VAR`], falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            contact: std::env::var(CONTACT_ENDPOINT_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_CONTACT_ENDPOINT.to_string()),
            keys: std::env::var(KEYS_ENDPOINT_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_KEYS_ENDPOINT.to_string()),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            contact: DEFAULT_CONTACT_ENDPOINT.to_string(),
            keys: DEFAULT_KEYS_ENDPOINT.to_string(),
        }
    }
}
