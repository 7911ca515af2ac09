//! Wire types for the portal API.
//!
//! The auth endpoints speak camelCase JSON (`expiresAt`, `qrData`); the admin
//! CRUD and document endpoints speak snake_case. Renames below follow what
//! each endpoint actually returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth types
// ============================================================================

/// QR material returned during first-time TOTP enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrData {
    /// Data-URI encoded PNG of the QR code.
    pub base64: Option<String>,
}

/// Response to an OTP/TOTP request for a mobile number.
///
/// `enabled == true` means the user already has TOTP set up (returning-user
/// login); otherwise `qr_data`/`secret` carry first-time enrollment material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    pub method: Option<String>,
    pub qr_data: Option<QrData>,
    pub secret: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Authenticated end user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(alias = "mobile_number")]
    pub mobile_number: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// Successful user login: bearer token plus profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
    pub expires_at: String,
}

/// Admin profile as returned by login and status checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
}

/// Successful admin login: bearer token plus profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: String,
    pub admin: AdminProfile,
    pub expires_at: String,
}

/// Response to a token refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    pub token: String,
    pub expires_at: String,
}

// ============================================================================
// Admin-managed entities
// ============================================================================

/// Verification lifecycle of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    VerificationInitiated,
    OtpSent,
    Verified,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "Unverified",
            VerificationStatus::VerificationInitiated => "Setup Started",
            VerificationStatus::OtpSent => "OTP Sent",
            VerificationStatus::Verified => "Verified",
        }
    }
}

/// A portal user as seen by the admin user list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: i64,
    pub mobile_number: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

/// A shared document backed by an external cloud-drive link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub google_drive_link: String,
    pub file_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInput {
    pub title: String,
    pub description: Option<String>,
    pub google_drive_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_challenge_enrollment_shape() {
        let json = r#"{
            "success": true,
            "method": "totp",
            "qrData": { "base64": "data:image/png;base64,iVBOR" },
            "secret": "ABC123",
            "enabled": false
        }"#;
        let challenge: OtpChallenge = serde_json::from_str(json).unwrap();
        assert!(!challenge.enabled);
        assert_eq!(challenge.secret.as_deref(), Some("ABC123"));
        assert_eq!(
            challenge.qr_data.unwrap().base64.as_deref(),
            Some("data:image/png;base64,iVBOR")
        );
    }

    #[test]
    fn otp_challenge_returning_user_shape() {
        let json = r#"{ "success": true, "method": "totp", "enabled": true }"#;
        let challenge: OtpChallenge = serde_json::from_str(json).unwrap();
        assert!(challenge.enabled);
        assert!(challenge.qr_data.is_none());
        assert!(challenge.secret.is_none());
    }

    #[test]
    fn auth_user_accepts_both_casings() {
        let camel: AuthUser =
            serde_json::from_str(r#"{ "id": 7, "mobileNumber": "+15551234567" }"#).unwrap();
        let snake: AuthUser =
            serde_json::from_str(r#"{ "id": 7, "mobile_number": "+15551234567" }"#).unwrap();
        assert_eq!(camel.mobile_number, snake.mobile_number);
    }

    #[test]
    fn verification_status_parses_wire_strings() {
        let user: PortalUser = serde_json::from_str(
            r#"{
                "id": 1,
                "mobile_number": "+15551234567",
                "is_verified": false,
                "verification_status": "otp_sent",
                "created_at": "2024-03-01T12:00:00Z",
                "last_login": null
            }"#,
        )
        .unwrap();
        assert_eq!(user.verification_status, VerificationStatus::OtpSent);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn document_round_trips_drive_link() {
        let doc: Document = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Onboarding Guide",
                "description": null,
                "google_drive_link": "https://drive.google.com/file/d/xyz/view",
                "file_id": "xyz",
                "created_at": "2024-03-01T12:00:00Z",
                "updated_at": "2024-03-02T08:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.file_id.as_deref(), Some("xyz"));
        assert!(doc.description.is_none());
    }
}
