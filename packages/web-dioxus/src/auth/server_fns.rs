//! Server functions for authentication.
//!
//! These run on the server: they call the portal REST API with explicitly
//! passed bearer tokens and persist the resulting tokens in the
//! tower-sessions store. All durable session writes go through the helpers
//! at the bottom of this file, so observers always see a consistent
//! (principal, token) pair.

use dioxus::prelude::*;

use portal_client::{AdminProfile, AuthUser, OtpChallenge};

// ============================================================================
// User auth
// ============================================================================

/// Request an OTP/TOTP challenge for a mobile number. The caller branches on
/// `enabled` (returning user) vs `qr_data` (first-time enrollment).
#[server]
pub async fn request_otp(mobile: String) -> Result<OtpChallenge, ServerFnError> {
    portal().request_otp(&mobile).await.map_err(user_facing)
}

/// Verify a code and establish a user session.
#[server]
pub async fn verify_otp(mobile: String, otp: String) -> Result<AuthUser, ServerFnError> {
    let session = portal().verify_otp(&mobile, &otp).await.map_err(user_facing)?;
    store_session(PrincipalKind::User, &session.token, &session.expires_at).await?;
    Ok(session.user)
}

/// Restore the user session on startup: read the persisted token, check it
/// against the backend, and silently fall back to unauthenticated when the
/// check fails (the expected expired-session case).
#[server]
pub async fn current_user() -> Result<Option<AuthUser>, ServerFnError> {
    let Some(token) = stored_token(PrincipalKind::User).await? else {
        return Ok(None);
    };

    if stored_token_expired(PrincipalKind::User).await? {
        clear_stored(PrincipalKind::User).await?;
        return Ok(None);
    }

    match portal().user_status(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
            tracing::debug!(error = %err, "user status check failed, clearing session");
            clear_stored(PrincipalKind::User).await?;
            Ok(None)
        }
    }
}

/// Exchange the current user token for a fresh one. Clears the session when
/// the backend refuses.
#[server]
pub async fn refresh_user_session() -> Result<(), ServerFnError> {
    let Some(token) = stored_token(PrincipalKind::User).await? else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    match portal().refresh_token(&token).await {
        Ok(refreshed) => {
            store_session(PrincipalKind::User, &refreshed.token, &refreshed.expires_at).await
        }
        Err(err) => {
            clear_stored(PrincipalKind::User).await?;
            Err(user_facing(err))
        }
    }
}

/// Logout: best-effort remote call, then unconditionally drop the stored
/// session.
#[server]
pub async fn user_logout() -> Result<(), ServerFnError> {
    if let Some(token) = stored_token(PrincipalKind::User).await? {
        if let Err(err) = portal().user_logout(&token).await {
            tracing::warn!(error = %err, "remote user logout failed");
        }
    }
    clear_stored(PrincipalKind::User).await
}

// ============================================================================
// Admin auth
// ============================================================================

/// Username/password login establishing an admin session.
#[server]
pub async fn admin_login(username: String, password: String) -> Result<AdminProfile, ServerFnError> {
    let session = portal()
        .admin_login(&username, &password)
        .await
        .map_err(user_facing)?;
    store_session(PrincipalKind::Admin, &session.token, &session.expires_at).await?;
    Ok(session.admin)
}

/// Restore the admin session on startup; same silent-fallback semantics as
/// [`current_user`].
#[server]
pub async fn current_admin() -> Result<Option<AdminProfile>, ServerFnError> {
    let Some(token) = stored_token(PrincipalKind::Admin).await? else {
        return Ok(None);
    };

    if stored_token_expired(PrincipalKind::Admin).await? {
        clear_stored(PrincipalKind::Admin).await?;
        return Ok(None);
    }

    match portal().admin_profile(&token).await {
        Ok(admin) => Ok(Some(admin)),
        Err(err) => {
            tracing::debug!(error = %err, "admin status check failed, clearing session");
            clear_stored(PrincipalKind::Admin).await?;
            Ok(None)
        }
    }
}

#[server]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    if let Some(token) = stored_token(PrincipalKind::Admin).await? {
        if let Err(err) = portal().admin_logout(&token).await {
            tracing::warn!(error = %err, "remote admin logout failed");
        }
    }
    clear_stored(PrincipalKind::Admin).await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

/// The two independent session kinds. A kind's token is only ever sent to
/// that kind's endpoints.
#[cfg(feature = "server")]
#[derive(Clone, Copy)]
pub(crate) enum PrincipalKind {
    User,
    Admin,
}

#[cfg(feature = "server")]
impl PrincipalKind {
    fn token_key(self) -> &'static str {
        match self {
            PrincipalKind::User => "user_token",
            PrincipalKind::Admin => "admin_token",
        }
    }

    fn expiry_key(self) -> &'static str {
        match self {
            PrincipalKind::User => "user_token_expiry",
            PrincipalKind::Admin => "admin_token_expiry",
        }
    }
}

#[cfg(feature = "server")]
pub(crate) fn portal() -> portal_client::PortalClient {
    let url =
        std::env::var("PORTAL_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    portal_client::PortalClient::new(url)
}

#[cfg(feature = "server")]
pub(crate) fn user_facing(err: portal_client::ClientError) -> ServerFnError {
    ServerFnError::new(err.user_message())
}

/// Bearer token for admin CRUD server functions.
#[cfg(feature = "server")]
pub(crate) async fn require_admin_token() -> Result<String, ServerFnError> {
    stored_token(PrincipalKind::Admin)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Bearer token for user-facing document server functions.
#[cfg(feature = "server")]
pub(crate) async fn require_user_token() -> Result<String, ServerFnError> {
    stored_token(PrincipalKind::User)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

#[cfg(feature = "server")]
async fn http_session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::prelude::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {e:?}")))
}

#[cfg(feature = "server")]
async fn store_session(
    kind: PrincipalKind,
    token: &str,
    expires_at: &str,
) -> Result<(), ServerFnError> {
    write_tokens(&http_session().await?, kind, token, expires_at).await
}

#[cfg(feature = "server")]
async fn stored_token(kind: PrincipalKind) -> Result<Option<String>, ServerFnError> {
    read_token(&http_session().await?, kind).await
}

#[cfg(feature = "server")]
async fn stored_token_expired(kind: PrincipalKind) -> Result<bool, ServerFnError> {
    token_expired(&http_session().await?, kind).await
}

#[cfg(feature = "server")]
async fn clear_stored(kind: PrincipalKind) -> Result<(), ServerFnError> {
    remove_tokens(&http_session().await?, kind).await
}

/// The single write path for the durable session entries: token and expiry
/// are stored together so no observer sees a partial update.
#[cfg(feature = "server")]
async fn write_tokens(
    session: &tower_sessions::Session,
    kind: PrincipalKind,
    token: &str,
    expires_at: &str,
) -> Result<(), ServerFnError> {
    session
        .insert(kind.token_key(), token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to store session: {e}")))?;
    session
        .insert(kind.expiry_key(), expires_at)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to store session: {e}")))?;
    Ok(())
}

#[cfg(feature = "server")]
async fn read_token(
    session: &tower_sessions::Session,
    kind: PrincipalKind,
) -> Result<Option<String>, ServerFnError> {
    session
        .get::<String>(kind.token_key())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to read session: {e}")))
}

/// True when a stored expiry timestamp parses and lies in the past. An
/// unparseable expiry is treated as opaque and left to the status check.
#[cfg(feature = "server")]
async fn token_expired(
    session: &tower_sessions::Session,
    kind: PrincipalKind,
) -> Result<bool, ServerFnError> {
    let expiry = session
        .get::<String>(kind.expiry_key())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to read session: {e}")))?;

    let Some(expiry) = expiry else {
        return Ok(false);
    };
    match chrono::DateTime::parse_from_rfc3339(&expiry) {
        Ok(ts) => Ok(ts < chrono::Utc::now()),
        Err(_) => Ok(false),
    }
}

#[cfg(feature = "server")]
async fn remove_tokens(
    session: &tower_sessions::Session,
    kind: PrincipalKind,
) -> Result<(), ServerFnError> {
    session
        .remove::<String>(kind.token_key())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {e}")))?;
    session
        .remove::<String>(kind.expiry_key())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {e}")))?;
    Ok(())
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn fresh_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn stored_token_round_trips() {
        let session = fresh_session();

        write_tokens(&session, PrincipalKind::User, "tok-123", "2099-01-01T00:00:00Z")
            .await
            .unwrap();

        let token = read_token(&session, PrincipalKind::User).await.unwrap();
        assert_eq!(token.as_deref(), Some("tok-123"));
        assert!(!token_expired(&session, PrincipalKind::User).await.unwrap());
    }

    #[tokio::test]
    async fn principal_kinds_are_independent() {
        let session = fresh_session();

        write_tokens(&session, PrincipalKind::User, "user-tok", "2099-01-01T00:00:00Z")
            .await
            .unwrap();
        write_tokens(&session, PrincipalKind::Admin, "admin-tok", "2099-01-01T00:00:00Z")
            .await
            .unwrap();

        remove_tokens(&session, PrincipalKind::User).await.unwrap();

        assert_eq!(read_token(&session, PrincipalKind::User).await.unwrap(), None);
        assert_eq!(
            read_token(&session, PrincipalKind::Admin).await.unwrap().as_deref(),
            Some("admin-tok")
        );
    }

    #[tokio::test]
    async fn past_expiry_is_reported_as_expired() {
        let session = fresh_session();

        write_tokens(&session, PrincipalKind::User, "tok", "2020-01-01T00:00:00Z")
            .await
            .unwrap();
        assert!(token_expired(&session, PrincipalKind::User).await.unwrap());
    }

    #[tokio::test]
    async fn unparseable_expiry_defers_to_the_status_check() {
        let session = fresh_session();

        write_tokens(&session, PrincipalKind::User, "tok", "not-a-timestamp")
            .await
            .unwrap();
        assert!(!token_expired(&session, PrincipalKind::User).await.unwrap());
    }

    #[tokio::test]
    async fn absent_expiry_is_not_expired() {
        let session = fresh_session();
        assert!(!token_expired(&session, PrincipalKind::User).await.unwrap());
    }
}
