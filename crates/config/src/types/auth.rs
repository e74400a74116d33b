//! Authentication types for the ticket marketplace client configuration.
//!
//! Responsibilities:
//! - Hold the optional bearer token issued by the identity provider.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Obtaining or refreshing identity tokens (the identity provider owns that flow).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Anonymous access (no token) is valid for the public ticket endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing optional SecretString values as strings.
mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token sent on every request when present.
    #[serde(default, with = "opt_secret_string")]
    pub api_token: Option<SecretString>,
}

impl AuthConfig {
    /// Create an auth config carrying a bearer token.
    pub fn with_token(token: SecretString) -> Self {
        Self {
            api_token: Some(token),
        }
    }

    /// Whether requests will be sent without credentials.
    pub fn is_anonymous(&self) -> bool {
        self.api_token.is_none()
    }
}
