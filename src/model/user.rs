use oauth2::AccessToken;
use serde_json::{json, Map, Value};

use crate::{
    client::{AuthScheme, DiscordApi, Method},
    config::Config,
    error::Error,
    model::{connection::UserConnection, guild::Guild, Cached},
    util::parse::{optional_string, optional_u64, parse_snowflake, require_field},
};

/// Marker prefix Discord puts on animated avatar hashes.
const ANIMATED_AVATAR_PREFIX: &str = "a_";

/// The authenticated Discord account.
///
/// Constructed once per deserialized `/users/@me` payload. Owns lazily
/// fetched caches of the account's guild memberships and third-party
/// connections; both start unfetched and are replaced wholesale by their
/// fetch operations.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's snowflake ID.
    pub id: u64,
    /// The user's username.
    pub username: String,
    /// Legacy 4-digit tag disambiguating identical usernames.
    pub discriminator: String,
    /// Hash of the user's avatar.
    ///
    /// When the payload carries no avatar this falls back to the
    /// discriminator string, so the derived avatar URL points at a
    /// nonexistent CDN resource. Inherited quirk of the upstream payload
    /// handling, kept as-is; check `has_default_avatar` before building URLs
    /// that must resolve.
    pub avatar_hash: String,
    /// Whether the account belongs to an OAuth2 application.
    pub bot: bool,
    /// Whether the account has two-factor authentication enabled.
    pub mfa_enabled: Option<bool>,
    /// The user's chosen language option.
    pub locale: Option<String>,
    /// Whether the email on the account has been verified.
    pub verified: Option<bool>,
    /// The user's email address, only present with the `email` scope.
    pub email: Option<String>,
    /// User flag bitmask.
    pub flags: Option<u64>,
    /// Nitro subscription tier.
    pub premium_type: Option<u64>,

    guilds: Cached<Vec<Guild>>,
    connections: Cached<Vec<UserConnection>>,
}

impl User {
    pub const ROUTE: &'static str = "/users/@me";

    /// Constructs a user from a decoded Discord user object.
    ///
    /// Only `id` is required (number or numeric string). `bot` defaults to
    /// false and `avatar` falls back to the discriminator string; every
    /// other optional key defaults to absent. No further validation is
    /// performed.
    ///
    /// # Returns
    /// - `Ok(User)` - Payload carried a coercible `id`, caches unfetched
    /// - `Err(Error::MissingField)` - `id` absent from the payload
    pub fn from_payload(payload: &Value) -> Result<Self, Error> {
        let id = parse_snowflake(require_field(payload, "id")?, "id")?;

        let discriminator = optional_string(payload.get("discriminator")).unwrap_or_default();
        let avatar_hash =
            optional_string(payload.get("avatar")).unwrap_or_else(|| discriminator.clone());

        Ok(Self {
            id,
            username: optional_string(payload.get("username")).unwrap_or_default(),
            discriminator,
            avatar_hash,
            bot: payload.get("bot").and_then(Value::as_bool).unwrap_or(false),
            mfa_enabled: payload.get("mfa_enabled").and_then(Value::as_bool),
            locale: optional_string(payload.get("locale")),
            verified: payload.get("verified").and_then(Value::as_bool),
            email: optional_string(payload.get("email")),
            flags: optional_u64(payload.get("flags")),
            premium_type: optional_u64(payload.get("premium_type")),
            guilds: Cached::Unfetched,
            connections: Cached::Unfetched,
        })
    }

    /// Fetches the authenticated user from the API and constructs the model.
    ///
    /// # Arguments
    /// - `api` - The request capability to issue the call through
    /// - `token` - The user's OAuth2 access token
    pub async fn fetch_from_api<A: DiscordApi>(
        api: &A,
        token: &AccessToken,
    ) -> Result<User, Error> {
        let payload = api
            .request(Self::ROUTE, Method::GET, AuthScheme::Bearer(token), None)
            .await?
            .unwrap_or(Value::Null);

        Self::from_payload(&payload)
    }

    /// An alias to the username attribute.
    pub fn name(&self) -> &str {
        &self.username
    }

    /// Whether the user's avatar is animated (a GIF avatar).
    pub fn is_avatar_animated(&self) -> bool {
        self.avatar_hash.starts_with(ANIMATED_AVATAR_PREFIX)
    }

    /// Whether the avatar hash is the discriminator fallback rather than a
    /// real avatar hash, in which case `avatar_url` does not resolve.
    pub fn has_default_avatar(&self) -> bool {
        self.avatar_hash == self.discriminator
    }

    /// Direct URL to the user's avatar.
    ///
    /// Pure string templating over (id, avatar hash, configured base URL and
    /// image formats); no I/O.
    pub fn avatar_url(&self, config: &Config) -> String {
        config.user_avatar_url(self.id, &self.avatar_hash, self.is_avatar_animated())
    }

    /// The cached guild memberships, in the order the last fetch returned them.
    ///
    /// Empty before the first `fetch_guilds` call. Use
    /// [`guilds_fetched`](Self::guilds_fetched) to tell an unfetched cache
    /// apart from an account with zero guilds.
    pub fn guilds(&self) -> &[Guild] {
        self.guilds.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `fetch_guilds` has populated the guild cache.
    pub fn guilds_fetched(&self) -> bool {
        self.guilds.is_fetched()
    }

    /// The cached third-party connections.
    ///
    /// Empty before the first `fetch_connections` call.
    pub fn connections(&self) -> &[UserConnection] {
        self.connections.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `fetch_connections` has populated the connections cache.
    pub fn connections_fetched(&self) -> bool {
        self.connections.is_fetched()
    }

    /// Fetches the user's guilds and replaces the guild cache.
    ///
    /// The cache is replaced entirely, not merged: entries from a previous
    /// fetch are dropped. On failure the previous cache state is untouched.
    /// Duplicate guild IDs in the response collapse to the last occurrence,
    /// so each ID appears in the cache exactly once.
    ///
    /// # Arguments
    /// - `api` - The request capability to issue the call through
    /// - `token` - The user's OAuth2 access token
    ///
    /// # Returns
    /// - `Ok(&[Guild])` - The refreshed guild view
    /// - `Err(Error)` - Transport or payload error, cache unchanged
    pub async fn fetch_guilds<A: DiscordApi>(
        &mut self,
        api: &A,
        token: &AccessToken,
    ) -> Result<&[Guild], Error> {
        let guilds = Guild::fetch_from_api(api, token).await?;

        tracing::debug!("Fetched {} guilds for user {}", guilds.len(), self.id);

        self.guilds = Cached::Fetched(dedup_by_id(guilds));
        Ok(self.guilds())
    }

    /// Fetches the user's linked connections and replaces the connections cache.
    ///
    /// Same replace-on-success contract as [`fetch_guilds`](Self::fetch_guilds).
    pub async fn fetch_connections<A: DiscordApi>(
        &mut self,
        api: &A,
        token: &AccessToken,
    ) -> Result<&[UserConnection], Error> {
        let connections = UserConnection::fetch_from_api(api, token).await?;

        tracing::debug!(
            "Fetched {} connections for user {}",
            connections.len(),
            self.id
        );

        self.connections = Cached::Fetched(connections);
        Ok(self.connections())
    }

    /// Adds the user to a guild, provided the OAuth2 grant carried the
    /// `guilds.join` scope.
    ///
    /// Issues a privileged PUT authenticated with the configured bot token;
    /// the user's access token travels in the request body. The API is
    /// idempotent: adding an existing member answers no-content, which maps
    /// to an empty membership mapping here and is not re-validated locally.
    ///
    /// # Arguments
    /// - `api` - The request capability to issue the call through
    /// - `token` - The user's OAuth2 access token (placed in the body)
    /// - `guild_id` - ID of the guild to add this user to
    ///
    /// # Returns
    /// - `Ok(mapping)` - The created guild member object, or an empty
    ///   mapping when the user was already a member
    /// - `Err(Error::Unauthorized)` - The presented credentials were rejected
    pub async fn add_to_guild<A: DiscordApi>(
        &self,
        api: &A,
        token: &AccessToken,
        guild_id: u64,
    ) -> Result<Map<String, Value>, Error> {
        let route = format!("/guilds/{}/members/{}", guild_id, self.id);
        let body = json!({ "access_token": token.secret() });

        let response = api
            .request(&route, Method::PUT, AuthScheme::Bot, Some(&body))
            .await?;

        match response {
            Some(Value::Object(member)) => Ok(member),
            _ => Ok(Map::new()),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.username, self.discriminator)
    }
}

/// Collapses duplicate guild IDs: the first occurrence keeps its position
/// in the view while later occurrences overwrite its value, so each ID
/// appears exactly once and the view stays in response order.
fn dedup_by_id(guilds: Vec<Guild>) -> Vec<Guild> {
    let mut cache: Vec<Guild> = Vec::with_capacity(guilds.len());
    for guild in guilds {
        if let Some(existing) = cache.iter_mut().find(|g| g.id == guild.id) {
            *existing = guild;
        } else {
            cache.push(guild);
        }
    }
    cache
}
