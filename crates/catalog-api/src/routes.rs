//! Router assembly
//!
//! Listing requires a token while fetching a single product does not; that
//! asymmetry is part of the published contract and is kept as-is.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, health, products};
use crate::middleware::require_bearer;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/products", get(products::list_products))
        .route("/product", post(products::create_product))
        .route(
            "/product/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route_layer(from_fn_with_state(state.clone(), require_bearer));

    let open = Router::new()
        .route("/product/{id}", get(products::get_product))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/health", get(health::health_check));

    Router::new().merge(protected).merge(open).with_state(state)
}
