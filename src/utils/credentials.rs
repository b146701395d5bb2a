use std::fmt::Debug;
use std::sync::Arc;

use crate::core::config::PasswordScheme;
use crate::core::error::Error;

/// How passwords are stored at registration and compared at login.
pub(crate) trait CredentialScheme: Debug + Send + Sync {
    fn prepare(&self, password: &str) -> Result<String, Error>;

    fn credentials_match(&self, stored: &str, provided: &str) -> Result<bool, Error>;
}

/// Stores the password as given and compares byte for byte.
#[derive(Debug, Default)]
pub(crate) struct Plaintext;

impl CredentialScheme for Plaintext {
    fn prepare(&self, password: &str) -> Result<String, Error> {
        Ok(password.to_owned())
    }

    fn credentials_match(&self, stored: &str, provided: &str) -> Result<bool, Error> {
        Ok(stored == provided)
    }
}

#[derive(Debug)]
pub(crate) struct Bcrypt {
    cost: u32,
}

impl Bcrypt {
    pub(crate) fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl CredentialScheme for Bcrypt {
    fn prepare(&self, password: &str) -> Result<String, Error> {
        bcrypt::hash(password, self.cost).map_err(Error::Bcrypt)
    }

    fn credentials_match(&self, stored: &str, provided: &str) -> Result<bool, Error> {
        Ok(bcrypt::verify(provided, stored)?)
    }
}

pub(crate) fn scheme(kind: PasswordScheme, cost: u32) -> Arc<dyn CredentialScheme> {
    match kind {
        PasswordScheme::Plaintext => Arc::new(Plaintext),
        PasswordScheme::Bcrypt => Arc::new(Bcrypt::new(cost)),
    }
}
