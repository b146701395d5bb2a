use serde::Serialize;

use crate::types::Reviews;

#[derive(Serialize)]
pub(crate) struct Message {
    pub(crate) message: String,
}

impl Message {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Login {
    pub(crate) message: String,
    pub(crate) token: String,
}

impl Login {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            message: "Login successful".into(),
            token: token.into(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct ReviewUpdate {
    pub(crate) message: String,
    pub(crate) reviews: Reviews,
}

impl ReviewUpdate {
    pub(crate) fn new(reviews: Reviews) -> Self {
        Self {
            message: "Review added/updated successfully".into(),
            reviews,
        }
    }
}
