//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VITRINA_KEY_PREFIX` - namespace prefix for store keys (default: `vitrina_`)
//! - `VITRINA_CHECKOUT_PHONE` - phone number orders are handed off to
//!   (default: the store's WhatsApp line)
//! - `VITRINA_HANDOFF_URL` - base URL of the external messaging endpoint
//!   (default: `https://api.whatsapp.com/send`)

use thiserror::Error;
use url::Url;

use crate::store::KeySpace;

/// Default namespace prefix for store keys.
pub const DEFAULT_KEY_PREFIX: &str = "vitrina_";

/// Default phone number for the checkout handoff.
pub const DEFAULT_CHECKOUT_PHONE: &str = "18294396607";

/// Default base URL for the checkout handoff.
pub const DEFAULT_HANDOFF_URL: &str = "https://api.whatsapp.com/send";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Namespace prefix for every store key.
    pub key_prefix: String,
    /// Phone number the checkout handoff targets.
    pub checkout_phone: String,
    /// Base URL of the external messaging endpoint.
    pub handoff_base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables, falling back to the
    /// documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `VITRINA_HANDOFF_URL` is set
    /// but is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_prefix =
            std::env::var("VITRINA_KEY_PREFIX").unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_owned());
        let checkout_phone = std::env::var("VITRINA_CHECKOUT_PHONE")
            .unwrap_or_else(|_| DEFAULT_CHECKOUT_PHONE.to_owned());
        let handoff_base_url =
            std::env::var("VITRINA_HANDOFF_URL").unwrap_or_else(|_| DEFAULT_HANDOFF_URL.to_owned());

        if let Err(error) = Url::parse(&handoff_base_url) {
            return Err(ConfigError::InvalidEnvVar(
                "VITRINA_HANDOFF_URL".to_owned(),
                error.to_string(),
            ));
        }

        Ok(Self {
            key_prefix,
            checkout_phone,
            handoff_base_url,
        })
    }

    /// The key layout for this configuration's namespace.
    #[must_use]
    pub fn keyspace(&self) -> KeySpace {
        KeySpace::new(self.key_prefix.clone())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            checkout_phone: DEFAULT_CHECKOUT_PHONE.to_owned(),
            handoff_base_url: DEFAULT_HANDOFF_URL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.key_prefix, "vitrina_");
        assert_eq!(config.keyspace().products(), "vitrina_products");
        assert!(Url::parse(&config.handoff_base_url).is_ok());
    }
}
