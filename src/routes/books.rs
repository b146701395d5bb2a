use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::{Book, Reviews};

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.catalog_controller.list_all().await)
}

#[instrument(skip(state))]
pub(crate) async fn get_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, Error> {
    Ok(Json(state.catalog_controller.get_by_isbn(&isbn).await?))
}

#[instrument(skip(state))]
pub(crate) async fn get_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, Error> {
    Ok(Json(state.catalog_controller.get_by_author(&author).await?))
}

#[instrument(skip(state))]
pub(crate) async fn get_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, Error> {
    Ok(Json(state.catalog_controller.get_by_title(&title).await?))
}

#[instrument(skip(state))]
pub(crate) async fn get_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Reviews>, Error> {
    Ok(Json(state.catalog_controller.get_reviews(&isbn).await?))
}
