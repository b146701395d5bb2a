use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::error::Error;
use crate::types::{Claims, Username};

/// Issues and verifies the stateless login tokens. One secret signs and
/// verifies every token in the process.
#[derive(Clone)]
pub(crate) struct TokenController {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenController")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenController {
    pub(crate) fn new(secret: &str, issuer: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.into(),
            ttl,
        }
    }

    pub(crate) fn issue(&self, username: &str) -> Result<String, Error> {
        self.issue_at(username, Utc::now())
    }

    pub(crate) fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, Error> {
        let expiration_time = now
            .checked_add_signed(self.ttl)
            .ok_or(Error::ExpiryOverflow)?;

        let claims = Claims {
            exp: expiration_time.timestamp() as usize,
            iat: now.timestamp() as usize,
            sub: username.to_string(),
            iss: self.issuer.clone(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    pub(crate) fn verify(&self, token: &str) -> Result<Username, Error> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims.sub),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(Error::ExpiredToken),
                _ => {
                    tracing::debug!("rejected token: {}", e);
                    Err(Error::InvalidToken)
                }
            },
        }
    }
}
