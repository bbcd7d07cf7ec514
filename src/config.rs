use crate::error::{config::ConfigError, Error};

const DISCORD_API_BASE_URL: &str = "https://discord.com/api";
const DISCORD_CDN_BASE_URL: &str = "https://cdn.discordapp.com";

const DISCORD_IMAGE_FORMAT: &str = "png";
const DISCORD_ANIMATED_IMAGE_FORMAT: &str = "gif";

/// Library configuration: the bot-level credential plus the base URLs used
/// for API requests and CDN asset URL construction.
///
/// The base URLs default to Discord's public endpoints and are kept as plain
/// fields so tests can point the client at a local stand-in.
pub struct Config {
    /// Bot token used for privileged calls such as adding a user to a guild.
    ///
    /// This is a separate credential from any user's OAuth2 access token.
    pub bot_token: String,

    /// Base URL for Discord REST API routes.
    pub api_base_url: String,

    /// Base URL for Discord CDN assets (avatars, guild icons).
    pub cdn_base_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with default Discord endpoints
    /// - `Err(Error::ConfigErr(MissingEnvVar))` - `DISCORD_BOT_TOKEN` is not set
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            api_base_url: DISCORD_API_BASE_URL.to_string(),
            cdn_base_url: DISCORD_CDN_BASE_URL.to_string(),
        })
    }

    /// Creates a configuration with the given bot token and default Discord endpoints.
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_base_url: DISCORD_API_BASE_URL.to_string(),
            cdn_base_url: DISCORD_CDN_BASE_URL.to_string(),
        }
    }

    /// Builds the direct URL to a user's avatar image.
    ///
    /// Pure string templating over the configured CDN base URL; animated
    /// avatars render with the animated image format, static ones with the
    /// static format.
    pub fn user_avatar_url(&self, user_id: u64, avatar_hash: &str, animated: bool) -> String {
        let format = if animated {
            DISCORD_ANIMATED_IMAGE_FORMAT
        } else {
            DISCORD_IMAGE_FORMAT
        };

        format!(
            "{}/avatars/{}/{}.{}",
            self.cdn_base_url, user_id, avatar_hash, format
        )
    }

    /// Builds the direct URL to a guild's icon image.
    pub fn guild_icon_url(&self, guild_id: u64, icon_hash: &str) -> String {
        format!(
            "{}/icons/{}/{}.{}",
            self.cdn_base_url, guild_id, icon_hash, DISCORD_IMAGE_FORMAT
        )
    }
}
