use crate::core::state::AppState;
use crate::routes::{auth, books, review};
use crate::utils;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(books::get_all))
        .route("/isbn/{isbn}", get(books::get_by_isbn))
        .route("/author/{author}", get(books::get_by_author))
        .route("/title/{title}", get(books::get_by_title))
}

pub(crate) fn routes(state: AppState) -> Router {
    let authorized_routes = Router::new()
        .route(
            "/review/{isbn}",
            put(review::put_review).delete(review::delete_review),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /customer/...
    let customer_router = Router::new()
        .route("/login", post(auth::login))
        .nest("/auth", authorized_routes);

    Router::new()
        .merge(catalog_routes())
        .route("/register", post(auth::register))
        .route("/review/{isbn}", get(books::get_reviews))
        .nest("/async", catalog_routes())
        .nest("/customer", customer_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any)
                        .allow_headers(cors::Any),
                ),
        )
}
