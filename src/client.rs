//! Authenticated HTTP access to the Discord REST API.
//!
//! This module owns the request capability consumed by the entity models. The
//! `DiscordApi` trait is the seam between the models and the transport: the real
//! `DiscordClient` sends requests over reqwest, while tests substitute a stub that
//! replays canned responses. Credentials are passed explicitly per request; this
//! layer never reaches into ambient session state.

use oauth2::AccessToken;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{config::Config, error::Error};

pub use reqwest::Method;

/// How a single API request authenticates.
///
/// Discord distinguishes user-scoped calls (bearer OAuth2 access token) from
/// bot-scoped calls (the application's bot token from configuration).
#[derive(Debug, Clone, Copy)]
pub enum AuthScheme<'a> {
    /// Authenticate with a user's OAuth2 access token (`Authorization: Bearer ...`).
    Bearer(&'a AccessToken),
    /// Authenticate with the configured bot token (`Authorization: Bot ...`).
    Bot,
}

/// The HTTP-request capability consumed by the entity models.
///
/// Implementations issue one authenticated request and decode the JSON body.
/// A no-content response decodes to `None`. Authorization failures surface as
/// `Error::Unauthorized`; other transport errors are surfaced unmodified.
pub trait DiscordApi {
    fn request(
        &self,
        route: &str,
        method: Method,
        auth: AuthScheme<'_>,
        body: Option<&Value>,
    ) -> impl std::future::Future<Output = Result<Option<Value>, Error>> + Send;
}

/// Discord REST API client backed by reqwest.
pub struct DiscordClient {
    http: reqwest::Client,
    config: Config,
}

impl DiscordClient {
    /// Creates a client with a default reqwest client.
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client reusing an existing reqwest client.
    ///
    /// Use this when the host application already maintains a shared HTTP
    /// client (connection pooling, proxy settings, etc.).
    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    /// Access to the configuration, e.g. for CDN URL construction.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn authorization(&self, auth: AuthScheme<'_>) -> String {
        match auth {
            AuthScheme::Bearer(token) => format!("Bearer {}", token.secret()),
            AuthScheme::Bot => format!("Bot {}", self.config.bot_token),
        }
    }
}

impl DiscordApi for DiscordClient {
    async fn request(
        &self,
        route: &str,
        method: Method,
        auth: AuthScheme<'_>,
        body: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        let url = format!("{}{}", self.config.api_base_url, route);

        tracing::debug!("{} {}", method, route);

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", self.authorization(auth));

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        let response = response.error_for_status()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let payload = serde_json::from_slice(&bytes)?;
        Ok(Some(payload))
    }
}
