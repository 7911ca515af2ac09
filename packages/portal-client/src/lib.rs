//! Pure REST API client for the DocVault portal backend.
//!
//! One method per remote capability; every authenticated call takes the
//! bearer token as an explicit argument. There is no mutable default-header
//! state: callers own their tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal_client::PortalClient;
//!
//! let client = PortalClient::new("http://localhost:8080");
//!
//! let challenge = client.request_otp("+15551234567").await?;
//! if challenge.enabled {
//!     let session = client.verify_otp("+15551234567", "123456").await?;
//!     let docs = client.user_documents(&session.token).await?;
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{
    AdminProfile, AdminSession, AuthSession, AuthUser, Document, DocumentInput, OtpChallenge,
    PortalUser, QrData, RefreshedToken, VerificationStatus,
};

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

#[derive(Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, req: RequestBuilder) -> Result<T> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(path, status = status.as_u16(), "portal api response");
        decode(status, &text)
    }

    /// Like [`Self::send`] for endpoints whose success payload carries nothing
    /// beyond the envelope.
    async fn send_ok(&self, path: &str, req: RequestBuilder) -> Result<()> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(path, status = status.as_u16(), "portal api response");
        check_envelope(status, &text).map(|_| ())
    }

    // ========================================================================
    // Admin auth
    // ========================================================================

    pub async fn admin_login(&self, username: &str, password: &str) -> Result<AdminSession> {
        let path = "/api/admin/login";
        let req = self
            .client
            .post(self.url(path))
            .json(&json!({ "username": username, "password": password }));
        self.send(path, req).await
    }

    pub async fn admin_profile(&self, token: &str) -> Result<AdminProfile> {
        let path = "/api/admin/profile";
        let req = self.client.get(self.url(path)).bearer_auth(token);
        let payload: ProfilePayload = self.send(path, req).await?;
        Ok(payload.user)
    }

    pub async fn admin_logout(&self, token: &str) -> Result<()> {
        let path = "/api/admin/logout";
        let req = self.client.post(self.url(path)).bearer_auth(token);
        self.send_ok(path, req).await
    }

    // ========================================================================
    // User auth
    // ========================================================================

    /// Request an OTP/TOTP challenge for a mobile number. The response
    /// distinguishes returning users (`enabled`) from first-time enrollment
    /// (`qr_data` + `secret`).
    pub async fn request_otp(&self, mobile: &str) -> Result<OtpChallenge> {
        let path = "/api/auth/request-otp";
        let req = self
            .client
            .post(self.url(path))
            .json(&json!({ "mobile": mobile }));
        self.send(path, req).await
    }

    pub async fn verify_otp(&self, mobile: &str, otp: &str) -> Result<AuthSession> {
        let path = "/api/auth/verify-otp";
        let req = self
            .client
            .post(self.url(path))
            .json(&json!({ "mobile": mobile, "otp": otp }));
        self.send(path, req).await
    }

    pub async fn user_status(&self, token: &str) -> Result<AuthUser> {
        let path = "/api/auth/status";
        let req = self.client.get(self.url(path)).bearer_auth(token);
        let payload: UserPayload = self.send(path, req).await?;
        Ok(payload.user)
    }

    pub async fn refresh_token(&self, token: &str) -> Result<RefreshedToken> {
        let path = "/api/auth/refresh";
        let req = self.client.post(self.url(path)).bearer_auth(token);
        self.send(path, req).await
    }

    pub async fn user_logout(&self, token: &str) -> Result<()> {
        let path = "/api/auth/logout";
        let req = self.client.post(self.url(path)).bearer_auth(token);
        self.send_ok(path, req).await
    }

    // ========================================================================
    // Admin: user management
    // ========================================================================

    pub async fn list_users(&self, token: &str) -> Result<Vec<PortalUser>> {
        let path = "/api/admin/users";
        let req = self.client.get(self.url(path)).bearer_auth(token);
        let payload: UsersPayload = self.send(path, req).await?;
        Ok(payload.users)
    }

    /// Create a user. Creation is OTP-gated: the admin first delivers an OTP
    /// to the new mobile via [`Self::admin_send_otp`], then submits it here.
    pub async fn create_user(&self, token: &str, mobile: &str, otp_code: &str) -> Result<()> {
        let path = "/api/admin/users";
        let req = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(&json!({ "mobile": mobile, "otpCode": otp_code }));
        self.send_ok(path, req).await
    }

    pub async fn delete_user(&self, token: &str, id: i64) -> Result<()> {
        let path = format!("/api/admin/users/{id}");
        let req = self.client.delete(self.url(&path)).bearer_auth(token);
        self.send_ok(&path, req).await
    }

    pub async fn admin_send_otp(&self, token: &str, mobile: &str) -> Result<()> {
        let path = "/api/admin/send-otp";
        let req = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(&json!({ "mobile": mobile }));
        self.send_ok(path, req).await
    }

    pub async fn verify_user_with_otp(&self, token: &str, id: i64, otp_code: &str) -> Result<()> {
        let path = format!("/api/admin/users/{id}/verify-with-otp");
        let req = self
            .client
            .put(self.url(&path))
            .bearer_auth(token)
            .json(&json!({ "otpCode": otp_code }));
        self.send_ok(&path, req).await
    }

    // ========================================================================
    // Admin: document management
    // ========================================================================

    pub async fn list_documents(&self, token: &str) -> Result<Vec<Document>> {
        let path = "/api/admin/documents";
        let req = self.client.get(self.url(path)).bearer_auth(token);
        let payload: DocumentsPayload = self.send(path, req).await?;
        Ok(payload.documents)
    }

    pub async fn create_document(&self, token: &str, input: &DocumentInput) -> Result<()> {
        let path = "/api/admin/documents";
        let req = self.client.post(self.url(path)).bearer_auth(token).json(input);
        self.send_ok(path, req).await
    }

    pub async fn update_document(
        &self,
        token: &str,
        id: i64,
        input: &DocumentInput,
    ) -> Result<()> {
        let path = format!("/api/admin/documents/{id}");
        let req = self.client.put(self.url(&path)).bearer_auth(token).json(input);
        self.send_ok(&path, req).await
    }

    pub async fn delete_document(&self, token: &str, id: i64) -> Result<()> {
        let path = format!("/api/admin/documents/{id}");
        let req = self.client.delete(self.url(&path)).bearer_auth(token);
        self.send_ok(&path, req).await
    }

    // ========================================================================
    // User: documents
    // ========================================================================

    pub async fn user_documents(&self, token: &str) -> Result<Vec<Document>> {
        let path = "/api/user/documents";
        let req = self.client.get(self.url(path)).bearer_auth(token);
        let payload: DocumentsPayload = self.send(path, req).await?;
        Ok(payload.documents)
    }

    pub async fn user_document(&self, token: &str, id: i64) -> Result<Document> {
        let path = format!("/api/user/documents/{id}");
        let req = self.client.get(self.url(&path)).bearer_auth(token);
        let payload: DocumentPayload = self.send(&path, req).await?;
        Ok(payload.document)
    }
}

// ============================================================================
// Envelope handling
// ============================================================================

#[derive(serde::Deserialize)]
struct ProfilePayload {
    user: AdminProfile,
}

#[derive(serde::Deserialize)]
struct UserPayload {
    user: AuthUser,
}

#[derive(serde::Deserialize)]
struct UsersPayload {
    users: Vec<PortalUser>,
}

#[derive(serde::Deserialize)]
struct DocumentsPayload {
    documents: Vec<Document>,
}

#[derive(serde::Deserialize)]
struct DocumentPayload {
    document: Document,
}

/// Every portal response carries a `success` flag; failures carry an `error`
/// string. Both non-2xx statuses and `success: false` envelopes are
/// normalized into [`ClientError::Api`].
fn check_envelope(status: StatusCode, body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if status.is_success() && success {
        return Ok(value);
    }

    let message = value
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value = check_envelope(status, body)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_extracts_success_payload() {
        let body = r#"{
            "success": true,
            "token": "t1",
            "admin": { "id": 1, "username": "admin" },
            "expiresAt": "2024-03-01T12:00:00Z"
        }"#;
        let session: AdminSession = decode(StatusCode::OK, body).unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.admin.username, "admin");
    }

    #[test]
    fn decode_surfaces_server_error_string() {
        let body = r#"{ "success": false, "error": "Invalid credentials" }"#;
        let err = decode::<AdminSession>(StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn success_flag_false_fails_even_with_2xx_status() {
        let body = r#"{ "success": false, "error": "OTP expired" }"#;
        let err = decode::<AuthSession>(StatusCode::OK, body).unwrap_err();
        assert_eq!(err.user_message(), "OTP expired");
    }

    #[test]
    fn non_json_body_falls_back_to_generic_message() {
        let err = check_envelope(StatusCode::BAD_GATEWAY, "<html>upstream down</html>").unwrap_err();
        match &err {
            ClientError::Api { status, message } => {
                assert_eq!(*status, 502);
                assert!(message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = PortalClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/auth/status"), "http://localhost:8080/api/auth/status");
    }
}
