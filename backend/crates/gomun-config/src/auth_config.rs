use crate::{ConfigError, ConfigErrorResult};

use gomun_core::DEFAULT_TOKEN_PREFIX;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Prefix of the placeholder token returned on login/register
    pub token_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_prefix: String::from(DEFAULT_TOKEN_PREFIX),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_prefix.is_empty() {
            return Err(ConfigError::auth("auth.token_prefix cannot be empty"));
        }
        Ok(())
    }
}
