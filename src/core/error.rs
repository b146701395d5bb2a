use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::types::response::Message;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Seed catalog error: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("Duplicate ISBN in seed catalog: {0}")]
    DuplicateIsbn(String),
    #[error("Signing secret must not be empty")]
    EmptySecret,
    #[error("Token lifetime out of range: {0} seconds")]
    TokenTtl(i64),
    #[error("Bcrypt cost out of range: {0}")]
    BcryptCost(u32),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("Username and password are required")]
    MissingFields,
    #[error("Review text is required")]
    MissingReview,
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Username already exists")]
    UserAlreadyExists,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Authorization token required")]
    NoCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Book not found")]
    BookNotFound,
    #[error("{0}")]
    NoMatches(&'static str),
    #[error("No reviews found for this book")]
    NoReviews,
    #[error("Review not found")]
    ReviewNotFound,
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Token expiry not representable")]
    ExpiryOverflow,
}

impl Error {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Error::MissingFields | Error::MissingReview | Error::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::UserAlreadyExists => StatusCode::CONFLICT,
            Error::InvalidCredentials | Error::InvalidToken | Error::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            Error::NoCredentials => StatusCode::FORBIDDEN,
            Error::BookNotFound
            | Error::NoMatches(_)
            | Error::NoReviews
            | Error::ReviewNotFound => StatusCode::NOT_FOUND,
            Error::Jwt(_) | Error::Bcrypt(_) | Error::ExpiryOverflow => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!("{:?}", self);
            "Internal server error".to_owned()
        } else {
            tracing::debug!("{:?}", self);
            match self {
                Error::InvalidToken | Error::ExpiredToken => "Invalid or expired token".to_owned(),
                e => e.to_string(),
            }
        };

        (status, Json(Message::new(&message))).into_response()
    }
}
