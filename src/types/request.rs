use serde::Deserialize;

/// Body of `/register` and `/customer/login`. Fields are optional so a
/// missing field surfaces as a 400 rather than a deserialization rejection.
#[derive(Deserialize)]
pub(crate) struct Credentials {
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
}

impl Credentials {
    /// Both fields, if present and non-empty.
    pub(crate) fn required(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some((username, password))
            }
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct ReviewData {
    pub(crate) review: Option<String>,
}
