// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;
use serde_json::Value;

use request_envelope::RequestError;

use crate::PortalClient;

/// What the contact form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl PortalClient {
    /// Submit a contact form.
    ///
    /// Success responses decode to their JSON body (or the success sentinel
    /// when there is none); failures read as
    /// `"Contact request failed: <reason>"`.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<Value, RequestError> {
        self.envelope
            .post_json(&self.endpoints.contact, form, "Contact request failed")
            .await
    }
}
