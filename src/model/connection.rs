use oauth2::AccessToken;
use serde_json::Value;

use crate::{
    client::{AuthScheme, DiscordApi, Method},
    error::{internal::InternalError, Error},
    util::parse::{optional_string, optional_u64, require_field},
};

/// A third-party account linked to the user's Discord profile
/// (e.g. a streaming or game service).
#[derive(Debug, Clone, PartialEq)]
pub struct UserConnection {
    /// ID of the connected account on the third-party service.
    pub id: String,
    /// Username on the third-party service.
    pub name: String,
    /// Service this connection is for (payload key `type`).
    pub kind: String,
    /// Whether the connection is revoked.
    pub revoked: Option<bool>,
    /// Whether the connection is verified.
    pub verified: Option<bool>,
    /// Whether friend sync is enabled for this connection.
    pub friend_sync: Option<bool>,
    /// Whether activities from this connection show in presence updates.
    pub show_activity: Option<bool>,
    /// Visibility of this connection (0 = invisible, 1 = everyone).
    pub visibility: Option<u64>,
}

impl UserConnection {
    pub const ROUTE: &'static str = "/users/@me/connections";

    /// Constructs a connection from a decoded Discord connection object.
    ///
    /// Connection IDs are third-party identifiers and stay strings; they are
    /// not snowflakes.
    ///
    /// # Returns
    /// - `Ok(UserConnection)` - Payload carried an `id`
    /// - `Err(Error::MissingField)` - `id` absent from the payload
    pub fn from_payload(payload: &Value) -> Result<Self, Error> {
        let id = require_field(payload, "id")?
            .as_str()
            .ok_or(Error::MissingField { field: "id" })?
            .to_string();

        Ok(Self {
            id,
            name: optional_string(payload.get("name")).unwrap_or_default(),
            kind: optional_string(payload.get("type")).unwrap_or_default(),
            revoked: payload.get("revoked").and_then(Value::as_bool),
            verified: payload.get("verified").and_then(Value::as_bool),
            friend_sync: payload.get("friend_sync").and_then(Value::as_bool),
            show_activity: payload.get("show_activity").and_then(Value::as_bool),
            visibility: optional_u64(payload.get("visibility")),
        })
    }

    /// Fetches the authenticated user's linked third-party connections.
    ///
    /// # Arguments
    /// - `api` - The request capability to issue the call through
    /// - `token` - The user's OAuth2 access token
    ///
    /// # Returns
    /// - `Ok(Vec<UserConnection>)` - One connection per response element
    /// - `Err(Error)` - Transport or payload error, surfaced unmodified
    pub async fn fetch_from_api<A: DiscordApi>(
        api: &A,
        token: &AccessToken,
    ) -> Result<Vec<UserConnection>, Error> {
        let Some(payload) = api
            .request(Self::ROUTE, Method::GET, AuthScheme::Bearer(token), None)
            .await?
        else {
            return Ok(Vec::new());
        };

        let Value::Array(items) = payload else {
            return Err(InternalError::UnexpectedPayload {
                route: Self::ROUTE.to_string(),
                expected: "array",
            }
            .into());
        };

        items.iter().map(UserConnection::from_payload).collect()
    }
}
