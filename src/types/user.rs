use serde::{Deserialize, Serialize};

pub(crate) type Username = String;

/// A registered customer. `password` holds whatever the configured
/// credential scheme produced at registration.
#[derive(Clone, Debug)]
pub(crate) struct User {
    pub(crate) username: Username,
    pub(crate) password: String,
}

/// The username resolved from a verified bearer token.
#[derive(Clone, Debug)]
pub(crate) struct AuthorizedUser {
    pub(crate) username: Username,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct Claims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) sub: String,
    pub(crate) iss: String,
}
