use oauth2::AccessToken;
use serde_json::Value;

use crate::{
    client::{AuthScheme, DiscordApi, Method},
    config::Config,
    error::{internal::InternalError, Error},
    util::parse::{optional_string, optional_u64, parse_snowflake, require_field},
};

/// A guild (server) the authenticated user is a member of, as returned by
/// the guild list route.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    /// The guild's snowflake ID.
    pub id: u64,
    /// The guild's name.
    pub name: String,
    /// Hash of the guild's icon, absent when the guild has none.
    pub icon_hash: Option<String>,
    /// Whether the authenticated user owns this guild.
    pub is_owner: Option<bool>,
    /// Permission bitmask of the user in this guild.
    pub permissions: Option<u64>,
}

impl Guild {
    pub const ROUTE: &'static str = "/users/@me/guilds";

    /// Constructs a guild from a decoded Discord guild object.
    ///
    /// Only `id` is required; it may be a number or a numeric string.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Payload carried a coercible `id`
    /// - `Err(Error::MissingField)` - `id` absent from the payload
    pub fn from_payload(payload: &Value) -> Result<Self, Error> {
        let id = parse_snowflake(require_field(payload, "id")?, "id")?;

        Ok(Self {
            id,
            name: optional_string(payload.get("name")).unwrap_or_default(),
            icon_hash: optional_string(payload.get("icon")),
            is_owner: payload.get("owner").and_then(Value::as_bool),
            permissions: optional_u64(payload.get("permissions")),
        })
    }

    /// Direct URL to the guild's icon, or `None` when the guild has no icon.
    pub fn icon_url(&self, config: &Config) -> Option<String> {
        self.icon_hash
            .as_deref()
            .map(|hash| config.guild_icon_url(self.id, hash))
    }

    /// Fetches all guilds the authenticated user belongs to.
    ///
    /// # Arguments
    /// - `api` - The request capability to issue the call through
    /// - `token` - The user's OAuth2 access token
    ///
    /// # Returns
    /// - `Ok(Vec<Guild>)` - One guild per element of the response array
    /// - `Err(Error)` - Transport or payload error, surfaced unmodified
    pub async fn fetch_from_api<A: DiscordApi>(
        api: &A,
        token: &AccessToken,
    ) -> Result<Vec<Guild>, Error> {
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

        items.iter().map(Guild::from_payload).collect()
    }
}
