use std::path::Path;

use eyre::bail;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    data::users::{User, UserId},
    data_impl::in_memory::{InMemoryDatabase, Tables},
};

pub type UnorderedMap<K, V> =
    std::collections::HashMap<K, V, ahash::RandomState>;

pub const DEFAULT_INVITE_CODE_LENGTH: usize = 12;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Users keyed by id.
    #[serde(default)]
    pub users: UnorderedMap<String, UserConfiguration>,

    #[serde(default)]
    pub security: SecurityConfiguration,

    #[serde(default = "default_invite_code_length")]
    pub invite_code_length: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            users: UnorderedMap::default(),
            security: SecurityConfiguration::default(),
            invite_code_length: DEFAULT_INVITE_CODE_LENGTH,
        }
    }
}

fn default_invite_code_length() -> usize {
    DEFAULT_INVITE_CODE_LENGTH
}

impl Configuration {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, eyre::Report> {
        let config = std::fs::read_to_string(path)?;
        let config: Configuration = serde_json::from_str(&config)?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_inline(config: impl AsRef<str>) -> Result<Self, eyre::Report> {
        let config: Configuration = serde_json::from_str(config.as_ref())?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), eyre::Report> {
        if self.invite_code_length == 0 {
            bail!("inviteCodeLength must be greater than zero");
        }

        for (token, session) in &self.security.sessions {
            if token.trim().is_empty() {
                bail!("session tokens must not be empty");
            }

            if !self.users.contains_key(&session.user_id) {
                bail!(
                    "session references unknown user '{}'",
                    session.user_id
                );
            }
        }

        Ok(())
    }

    pub fn to_in_memory_database(&self) -> InMemoryDatabase {
        let mut users = self
            .users
            .iter()
            .map(|(id, user)| {
                User::new(
                    UserId::new(id.clone()),
                    user.name.clone(),
                    user.email.clone(),
                )
            })
            .collect::<Vec<_>>();

        users.sort_by(|a, b| a.id.cmp(&b.id));

        InMemoryDatabase::new(Tables {
            users,
            ..Default::default()
        })
    }
}

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema,
)]
pub struct UserConfiguration {
    pub name: String,
    pub email: String,
}

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema,
)]
pub struct SecurityConfiguration {
    /// Session tokens accepted as `Authorization: Bearer <token>`.
    #[serde(default)]
    pub sessions: UnorderedMap<String, SessionConfiguration>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfiguration {
    pub user_id: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>")]
    #[serde(default)]
    pub expires_at: Option<OffsetDateTime>,
}

impl SessionConfiguration {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            enabled: true,
            expires_at: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "users": {
            "u1": { "name": "Ada", "email": "ada@example.com" }
        },
        "security": {
            "sessions": {
                "token-1": { "userId": "u1" },
                "token-2": {
                    "userId": "u1",
                    "enabled": false,
                    "expiresAt": "2030-01-01T00:00:00Z"
                }
            }
        }
    }"#;

    #[test]
    fn test_inline_config_defaults() {
        let config =
            Configuration::from_inline(CONFIG).expect("should parse config");

        assert_eq!(config.invite_code_length, DEFAULT_INVITE_CODE_LENGTH);

        let session = &config.security.sessions["token-1"];
        assert!(session.enabled);
        assert!(session.expires_at.is_none());

        let disabled = &config.security.sessions["token-2"];
        assert!(!disabled.enabled);
        assert!(disabled.expires_at.is_some());
    }

    #[test]
    fn test_unknown_session_user_is_rejected() {
        let config = r#"{
            "security": { "sessions": { "t": { "userId": "ghost" } } }
        }"#;

        assert!(Configuration::from_inline(config).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("taskdeck.json");
        std::fs::write(&path, CONFIG).expect("should write config");

        let config = Configuration::from_file(&path).expect("should load");

        assert_eq!(config.users.len(), 1);
    }

    #[test]
    fn test_users_are_seeded() {
        let config =
            Configuration::from_inline(CONFIG).expect("should parse config");

        let tables = config.to_in_memory_database().snapshot();

        assert_eq!(tables.users.len(), 1);
        assert_eq!(tables.users[0].name, "Ada");
    }
}
