//! Type-safe session storage for the Discord OAuth2 token payload.
//!
//! The host application performs the OAuth2 authorization flow and stores the
//! resulting token payload in its tower-sessions store through this wrapper. The
//! entity models never read the session themselves; they take an access token as
//! an explicit parameter, which callers obtain from here.

use oauth2::{AccessToken, RefreshToken};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

// Session key constant
const SESSION_OAUTH2_TOKEN: &str = "discord:oauth2_token";

/// The OAuth2 token payload as returned by Discord's token endpoint.
///
/// Only `access_token` is consumed by this library; the remaining fields are
/// round-tripped so the host application can refresh tokens itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Bearer credential authorizing API calls on behalf of the user.
    pub access_token: AccessToken,
    /// Token type, `"Bearer"` for Discord.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Credential for obtaining a fresh access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,
    /// Space-separated scopes granted to the token (e.g. `"identify guilds.join"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenPayload {
    /// Creates a payload carrying only an access token.
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            token_type: None,
            expires_in: None,
            refresh_token: None,
            scope: None,
        }
    }
}

/// Discord OAuth2 session management.
///
/// Wraps a tower-sessions `Session` and exposes only the operations relevant
/// to the Discord token payload, keeping the session key in one place.
pub struct DiscordOAuth2Session<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> DiscordOAuth2Session<'a> {
    /// Creates a new DiscordOAuth2Session wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference for use with other APIs.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the OAuth2 token payload in the session.
    ///
    /// Called after a successful authorization code exchange to establish an
    /// authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(Error::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: TokenPayload) -> Result<(), Error> {
        self.session.insert(SESSION_OAUTH2_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the OAuth2 token payload from the session.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Session holds a token payload
    /// - `Ok(None)` - No token in session (user not authenticated)
    /// - `Err(Error::SessionErr(_))` - Failed to access session
    pub async fn get_token(&self) -> Result<Option<TokenPayload>, Error> {
        let token = self
            .session
            .get::<TokenPayload>(SESSION_OAUTH2_TOKEN)
            .await?;
        Ok(token)
    }

    /// Retrieves the token payload, failing when the session holds none.
    ///
    /// Used by callers about to issue an authenticated or privileged API call.
    ///
    /// # Returns
    /// - `Ok(token)` - Session holds a token payload
    /// - `Err(Error::Unauthorized)` - No token in session
    /// - `Err(Error::SessionErr(_))` - Failed to access session
    pub async fn require_token(&self) -> Result<TokenPayload, Error> {
        self.get_token().await?.ok_or(Error::Unauthorized)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to drop the stored token payload.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn test_session() -> Session {
        let store = Arc::new(MemoryStore::default());
        Session::new(None, store, None)
    }

    /// Tests storing and reading back the token payload.
    ///
    /// Expected: Ok(Some) with the same access token secret
    #[tokio::test]
    async fn stores_and_reads_token() {
        let session = test_session();
        let oauth_session = DiscordOAuth2Session::new(&session);

        let payload = TokenPayload {
            access_token: AccessToken::new("secret-token".to_string()),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(604800),
            refresh_token: Some(RefreshToken::new("refresh".to_string())),
            scope: Some("identify guilds guilds.join".to_string()),
        };
        oauth_session.set_token(payload).await.unwrap();

        let stored = oauth_session.get_token().await.unwrap().unwrap();
        assert_eq!(stored.access_token.secret(), "secret-token");
        assert_eq!(stored.scope.as_deref(), Some("identify guilds guilds.join"));
    }

    /// Tests that require_token fails with Unauthorized on an empty session.
    ///
    /// Expected: Err(Unauthorized)
    #[tokio::test]
    async fn requires_token_fails_when_absent() {
        let session = test_session();
        let oauth_session = DiscordOAuth2Session::new(&session);

        let result = oauth_session.require_token().await;
        assert!(matches!(result, Err(Error::Unauthorized)));
    }

    /// Tests that clearing the session drops the stored token.
    ///
    /// Expected: Ok(None) after clear
    #[tokio::test]
    async fn clears_stored_token() {
        let session = test_session();
        let oauth_session = DiscordOAuth2Session::new(&session);

        let payload = TokenPayload::new(AccessToken::new("secret-token".to_string()));
        oauth_session.set_token(payload).await.unwrap();
        oauth_session.clear().await;

        assert!(oauth_session.get_token().await.unwrap().is_none());
    }
}
