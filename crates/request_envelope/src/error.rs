// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Failure of one enveloped HTTP call.
///
/// Two kinds, nothing else: either the request never produced a response, or
/// a response arrived with a failure status. Both display as their `detail`,
/// which is meant to be shown to the user verbatim.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never reached a server: connection refused, DNS failure,
    /// timeout, or the payload could not even be serialized. `detail` is the
    /// native error message.
    #[error("{detail}")]
    Transport { detail: String },

    /// The server responded and the status signals failure. `detail` is
    /// already prefixed with the operation label, e.g.
    /// `"Contact request failed: rate limited"`.
    #[error("{detail}")]
    Api { status: u16, detail: String },
}

impl RequestError {
    pub(crate) fn transport(err: impl std::fmt::Display) -> Self {
        RequestError::Transport {
            detail: err.to_string(),
        }
    }

    /// The HTTP status for `Api` errors; `Transport` failures never got one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Transport { .. } => None,
            RequestError::Api { status, .. } => Some(*status),
        }
    }
}
