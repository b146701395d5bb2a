use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::AuthorizedUser;

/// Guards `/customer/auth/*`. A missing or non-Bearer `Authorization`
/// header is refused before any token is looked at.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let token = match request.headers().get(http::header::AUTHORIZATION) {
        Some(header) => bearer_token(header.to_str().map_err(|_| Error::NoCredentials)?)
            .ok_or(Error::NoCredentials)?
            .to_owned(),
        None => return Err(Error::NoCredentials),
    };

    let username = state.token_controller.verify(&token)?;

    request
        .extensions_mut()
        .insert(AuthorizedUser { username });

    Ok(next.run(request).await)
}

fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
