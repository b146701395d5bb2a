use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::{AuthorizedUser, request, response};

#[instrument(skip(state, user, payload))]
pub(crate) async fn put_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthorizedUser>,
    Path(isbn): Path<String>,
    payload: Result<Json<request::ReviewData>, JsonRejection>,
) -> Result<Json<response::ReviewUpdate>, Error> {
    let Json(params) = payload?;
    let review = params.review.ok_or(Error::MissingReview)?;

    let reviews = state
        .review_controller
        .upsert_review(&isbn, &user.username, &review)
        .await?;

    Ok(Json(response::ReviewUpdate::new(reviews)))
}

#[instrument(skip(state, user))]
pub(crate) async fn delete_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthorizedUser>,
    Path(isbn): Path<String>,
) -> Result<Json<response::Message>, Error> {
    state
        .review_controller
        .delete_review(&isbn, &user.username)
        .await?;

    Ok(Json(response::Message::new("Review deleted successfully")))
}
