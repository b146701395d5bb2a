use chrono::{Duration, Utc};
use config::{Config, Environment, Source};
use serde::Deserialize;

use crate::core::error::ConfigError;

// Costs bcrypt accepts; anything else fails on every hash.
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PasswordScheme {
    Plaintext,
    Bcrypt,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) log_level: String,
    pub(crate) port: u16,
    pub(crate) secret: String,
    pub(crate) token_ttl_seconds: i64,
    pub(crate) token_issuer: String,
    pub(crate) catalog_path: Option<String>,
    pub(crate) password_scheme: PasswordScheme,
    pub(crate) bcrypt_cost: u32,
    pub(crate) empty_search_is_error: bool,
}

impl Args {
    /// `bookstore.toml` in the working directory if present, overridden by
    /// `BOOKSTORE_*` environment variables.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            config::File::with_name("bookstore").required(false),
            Environment::with_prefix("BOOKSTORE"),
        )
    }

    fn from_sources<F>(file: F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        let args = Config::builder()
            .set_default("log_level", "info")?
            .set_default("port", 5000)?
            .set_default("token_ttl_seconds", 3600)?
            .set_default("token_issuer", "bookstore")?
            .set_default("password_scheme", "plaintext")?
            .set_default("bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .set_default("empty_search_is_error", true)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize::<Args>()?;

        args.validate()?;

        Ok(args)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        self.token_ttl()?;

        if !BCRYPT_COSTS.contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }

        Ok(())
    }

    /// Positive, and small enough that a token issued now still has a
    /// representable expiry.
    pub(crate) fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_seconds(self.token_ttl_seconds)
            .filter(|ttl| *ttl > Duration::zero())
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or(ConfigError::TokenTtl(self.token_ttl_seconds))
    }
}

#[cfg(test)]
impl Args {
    pub(crate) fn for_tests() -> Self {
        Self {
            log_level: "debug".into(),
            port: 0,
            secret: "test-secret".into(),
            token_ttl_seconds: 3600,
            token_issuer: "bookstore".into(),
            catalog_path: None,
            password_scheme: PasswordScheme::Plaintext,
            bcrypt_cost: 4,
            empty_search_is_error: true,
        }
    }
}
