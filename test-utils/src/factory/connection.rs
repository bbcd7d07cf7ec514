//! Connection payload factory for Discord connection object tests.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for Discord user connection payloads with customizable fields.
///
/// Defaults:
/// - id: `"connection_{id}"` (third-party IDs are strings, not snowflakes)
/// - name: `"account_{id}"`
/// - kind: `"twitch"`
/// - verified: `true`
pub struct ConnectionPayloadFactory {
    id: String,
    name: String,
    kind: String,
    verified: bool,
    visibility: u64,
}

impl ConnectionPayloadFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id: format!("connection_{}", id),
            name: format!("account_{}", id),
            kind: "twitch".to_string(),
            verified: true,
            visibility: 1,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the service type (serialized under the payload key `type`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn visibility(mut self, visibility: u64) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "type": self.kind,
            "revoked": false,
            "verified": self.verified,
            "friend_sync": false,
            "show_activity": true,
            "visibility": self.visibility,
        })
    }
}

impl Default for ConnectionPayloadFactory {
    fn default() -> Self {
        Self::new()
    }
}
