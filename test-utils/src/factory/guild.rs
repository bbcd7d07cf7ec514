//! Guild payload factory for Discord guild object tests.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for Discord guild payloads with customizable fields.
///
/// Defaults:
/// - id: auto-incremented
/// - name: `"Guild {id}"`
/// - icon: `None`
/// - owner: `false`
pub struct GuildPayloadFactory {
    id: u64,
    name: String,
    icon: Option<String>,
    owner: bool,
    permissions: Option<u64>,
}

impl GuildPayloadFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Guild {}", id),
            icon: None,
            owner: false,
            permissions: None,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn owner(mut self, owner: bool) -> Self {
        self.owner = owner;
        self
    }

    pub fn permissions(mut self, permissions: u64) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Builds the JSON payload. IDs serialize as numeric strings, matching
    /// Discord's wire format.
    pub fn build(self) -> Value {
        let mut payload = json!({
            "id": self.id.to_string(),
            "name": self.name,
            "owner": self.owner,
        });

        let object = payload.as_object_mut().unwrap();
        if let Some(icon) = self.icon {
            object.insert("icon".to_string(), json!(icon));
        }
        if let Some(permissions) = self.permissions {
            object.insert("permissions".to_string(), json!(permissions.to_string()));
        }

        payload
    }
}

impl Default for GuildPayloadFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_payload_with_defaults() {
        let payload = GuildPayloadFactory::new().build();
        let object = payload.as_object().unwrap();

        let id = object["id"].as_str().unwrap();
        assert!(id.parse::<u64>().is_ok());
        assert_eq!(object["name"].as_str().unwrap(), format!("Guild {}", id));
        assert_eq!(object["owner"], false);
        assert!(!object.contains_key("icon"));
        assert!(!object.contains_key("permissions"));
    }

    #[test]
    fn builds_payload_with_custom_values() {
        let payload = GuildPayloadFactory::new()
            .id(197038439483310086)
            .name("Rust Hideout")
            .icon(Some("abc123".to_string()))
            .owner(true)
            .permissions(2147483647)
            .build();

        assert_eq!(payload["id"], "197038439483310086");
        assert_eq!(payload["name"], "Rust Hideout");
        assert_eq!(payload["icon"], "abc123");
        assert_eq!(payload["owner"], true);
        // Permissions serialize as a numeric string, matching Discord's wire format.
        assert_eq!(payload["permissions"], "2147483647");
    }
}
