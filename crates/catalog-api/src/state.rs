use std::sync::Arc;

use catalog_core::repositories::ProductRepository;
use catalog_core::services::AuthService;
use catalog_security::TokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenIssuer>,
}
