//! User payload factory for Discord user object tests.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for Discord user payloads with customizable fields.
///
/// Defaults:
/// - id: auto-incremented
/// - username: `"user_{id}"`
/// - discriminator: `"0001"`
/// - avatar: `Some("avatarhash{id}")`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserPayloadFactory;
///
/// let payload = UserPayloadFactory::new()
///     .username("nelly")
///     .avatar(None)
///     .build();
/// ```
pub struct UserPayloadFactory {
    id: u64,
    username: String,
    discriminator: String,
    avatar: Option<String>,
    bot: Option<bool>,
    email: Option<String>,
}

impl UserPayloadFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            username: format!("user_{}", id),
            discriminator: "0001".to_string(),
            avatar: Some(format!("avatarhash{}", id)),
            bot: None,
            email: None,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    /// Sets the avatar hash; `None` omits the key from the payload entirely.
    pub fn avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = Some(bot);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the JSON payload. IDs serialize as numeric strings, matching
    /// Discord's wire format.
    pub fn build(self) -> Value {
        let mut payload = json!({
            "id": self.id.to_string(),
            "username": self.username,
            "discriminator": self.discriminator,
        });

        let object = payload.as_object_mut().unwrap();
        if let Some(avatar) = self.avatar {
            object.insert("avatar".to_string(), json!(avatar));
        }
        if let Some(bot) = self.bot {
            object.insert("bot".to_string(), json!(bot));
        }
        if let Some(email) = self.email {
            object.insert("email".to_string(), json!(email));
        }

        payload
    }
}

impl Default for UserPayloadFactory {
    fn default() -> Self {
        Self::new()
    }
}
