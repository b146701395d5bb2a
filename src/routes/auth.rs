use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::{request, response};

#[instrument(skip(state, payload))]
pub(crate) async fn register(
    State(state): State<AppState>,
    payload: Result<Json<request::Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<response::Message>), Error> {
    let Json(user_data) = payload?;
    let (username, password) = user_data.required().ok_or(Error::MissingFields)?;

    state.user_controller.register(username, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(response::Message::new("User registered successfully")),
    ))
}

#[instrument(skip(state, payload))]
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<request::Credentials>, JsonRejection>,
) -> Result<Json<response::Login>, Error> {
    let Json(user_data) = payload?;
    let (username, password) = user_data.required().ok_or(Error::MissingFields)?;

    if !state.user_controller.authenticate(username, password).await? {
        tracing::warn!("failed login for {}", username);
        return Err(Error::InvalidCredentials);
    }

    let token = state.token_controller.issue(username)?;

    tracing::info!("{} logged in", username);

    Ok(Json(response::Login::new(&token)))
}
