use std::sync::Arc;

use crate::controllers::catalog::CatalogController;
use crate::controllers::review::ReviewController;
use crate::controllers::token::TokenController;
use crate::controllers::user::UserController;
use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::core::store::Store;
use crate::utils::credentials;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) user_controller: UserController,
    pub(crate) token_controller: TokenController,
    pub(crate) catalog_controller: CatalogController,
    pub(crate) review_controller: ReviewController,
}

impl AppState {
    pub(crate) fn new(config: &Args, store: Arc<Store>) -> Result<Self, ConfigError> {
        let scheme = credentials::scheme(config.password_scheme, config.bcrypt_cost);

        Ok(AppState {
            user_controller: UserController::new(store.clone(), scheme),
            token_controller: TokenController::new(
                &config.secret,
                &config.token_issuer,
                config.token_ttl()?,
            ),
            catalog_controller: CatalogController::new(
                store.clone(),
                config.empty_search_is_error.into(),
            ),
            review_controller: ReviewController::new(store),
        })
    }
}
