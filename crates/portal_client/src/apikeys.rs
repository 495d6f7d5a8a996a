// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

use request_envelope::RequestError;

use crate::PortalClient;

/// What a key-creation request submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyRequest {
    pub name: String,
    pub permissions: Vec<String>,
}

/// The portal's view of one API key. The secret `key` itself is only
/// populated in the creation response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: Option<String>,
    pub name: String,
    pub key: Option<String>,
    pub permissions: Vec<String>,
    pub created_at: Option<String>,
    pub last_used_at: Option<String>,
}

/// `<endpoint>?userId=<user_id>`, with the id form-encoded.
fn keys_url_for_user(endpoint: &str, user_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("userId", user_id)
        .finish();
    format!("{endpoint}?{query}")
}

impl PortalClient {
    /// Create an API key for `user_id`.
    ///
    /// The decoded response usually matches [`ApiKey`]; failures read as
    /// `"Create API key failed: <reason>"`.
    pub async fn create_api_key(
        &self,
        user_id: &str,
        request: &ApiKeyRequest,
    ) -> Result<Value, RequestError> {
        let url = keys_url_for_user(&self.endpoints.keys, user_id);
        self.envelope
            .post_json(&url, request, "Create API key failed")
            .await
    }

    /// List the API keys of `user_id`.
    pub async fn list_api_keys(&self, user_id: &str) -> Result<Value, RequestError> {
        let url = keys_url_for_user(&self.endpoints.keys, user_id);
        self.envelope.get_json(&url, "List API keys failed").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use request_envelope::Method;

    use super::*;
    use crate::test_support::mock_client;

    fn request() -> ApiKeyRequest {
        ApiKeyRequest {
            name: "k1".into(),
            permissions: vec!["read".into()],
        }
    }

    #[test]
    fn the_user_id_rides_in_the_query_string() {
        assert_eq!(keys_url_for_user("/api/keys", "u1"), "/api/keys?userId=u1");
        assert_eq!(
            keys_url_for_user("/api/keys", "user id/7"),
            "/api/keys?userId=user+id%2F7"
        );
    }

    #[tokio::test]
    async fn creates_a_key_for_the_user() {
        let (client, log) = mock_client(
            200,
            "OK",
            Some(
                r#"{"id":"7","name":"k1","key":"sk-123","permissions":["read"],"createdAt":"2024-05-01T00:00:00Z"}"#,
            ),
        );
        let value = client.create_api_key("u1", &request()).await.unwrap();

        let key: ApiKey = serde_json::from_value(value).unwrap();
        assert_eq!(key.name, "k1");
        assert_eq!(key.key.as_deref(), Some("sk-123"));
        assert_eq!(key.created_at.as_deref(), Some("2024-05-01T00:00:00Z"));
        assert_eq!(key.last_used_at, None);

        let log = log.lock().unwrap();
        let (method, url, body) = &log[0];
        assert_eq!(*method, Method::Post);
        assert_eq!(url, "/api/keys?userId=u1");
        let body: Value = serde_json::from_slice(body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "k1", "permissions": ["read"]}));
    }

    #[tokio::test]
    async fn an_empty_creation_response_is_still_a_success() {
        let (client, _log) = mock_client(200, "OK", None);
        let value = client.create_api_key("u1", &request()).await.unwrap();
        assert_eq!(value, json!({"success": true}));
    }

    #[tokio::test]
    async fn failure_messages_are_labelled() {
        let (client, _log) = mock_client(400, "Bad Request", Some("bad request"));
        let err = client.create_api_key("u1", &request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Create API key failed: bad request");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn listing_uses_get() {
        let (client, log) = mock_client(
            200,
            "OK",
            Some(r#"[{"name":"k1","permissions":["read"]},{"name":"k2","permissions":[]}]"#),
        );
        let value = client.list_api_keys("u1").await.unwrap();
        let keys: Vec<ApiKey> = serde_json::from_value(value).unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].name, "k1");

        let log = log.lock().unwrap();
        let (method, url, body) = &log[0];
        assert_eq!(*method, Method::Get);
        assert_eq!(url, "/api/keys?userId=u1");
        assert!(body.is_none());
    }
}
